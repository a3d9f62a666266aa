//! Canned reply strings and FAQ snippets.
//!
//! Static configuration data: loaded into the catalog at startup and never
//! mutated at runtime.

use super::model::{FaqEntry, ReplyCatalog};

const QUICK_REPLIES: [&str; 8] = [
    "Hi! Yes, this item is still available. Would you like to know more about it?",
    "Thanks for your interest! When would you like to pick it up?",
    "The price is firm, but I can offer free delivery within 10 miles.",
    "Let me know if you have any questions about the item!",
    "Yes, I can hold it for you. How soon can you pick it up?",
    "The item is in excellent condition. Would you like to see more photos?",
    "I'm available to meet today or tomorrow. What works best for you?",
    "Thanks for reaching out! The item is exactly as described in the listing.",
];

const COMMON_QUESTIONS: [(&str, &str); 5] = [
    ("Is this still available?", "Yes, this item is still available!"),
    (
        "What's your lowest price?",
        "The price listed is my best offer, but I'm open to reasonable offers.",
    ),
    (
        "Can you deliver?",
        "Yes, I can deliver within a reasonable distance. Where are you located?",
    ),
    (
        "What condition is it in?",
        "It's in excellent condition with minimal signs of use.",
    ),
    (
        "When can I pick it up?",
        "I'm flexible with pickup times. When works best for you?",
    ),
];

/// Build the catalog handed to the frontend.
pub fn reply_catalog() -> ReplyCatalog {
    ReplyCatalog {
        quick_replies: QUICK_REPLIES.iter().map(|s| s.to_string()).collect(),
        common_questions: COMMON_QUESTIONS
            .iter()
            .map(|(q, a)| FaqEntry {
                question: q.to_string(),
                answer: a.to_string(),
            })
            .collect(),
    }
}
