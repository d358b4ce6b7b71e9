//! Fixed page text.

use journey_core::model::{ConversationTopic, GrowthValue, Reaction};

pub const THOUGHT_DEFAULT: &str = "There's something I wanted to tell you...";
pub const THOUGHT_CURIOUS: &str = "I knew you'd be curious...";
pub const THOUGHT_SKEPTICAL: &str = "It's okay to have doubts. I did too.";

pub const NOT_YET_NOTICE: &str = "That's okay. Come back whenever you like, I'll be here :)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryCard {
    pub id: &'static str,
    pub front: &'static str,
    pub back: &'static str,
}

pub const MEMORY_CARDS: [MemoryCard; 3] = [
    MemoryCard {
        id: "memory-1",
        front: "The first conversation",
        back: "You laughed at a joke nobody else got. I remember thinking I wanted to hear that laugh again.",
    },
    MemoryCard {
        id: "memory-2",
        front: "The rainy afternoon",
        back: "We waited out the storm talking about books, and the hours went by without either of us noticing.",
    },
    MemoryCard {
        id: "memory-3",
        front: "The small kindness",
        back: "You helped a stranger without a second thought. That stayed with me longer than you'd guess.",
    },
];

#[must_use]
pub fn reaction_response(reaction: Reaction) -> &'static str {
    match reaction {
        Reaction::Intrigued => {
            "I'm glad you find it interesting! I spent a lot of time making something just for you."
        }
        Reaction::Confused => {
            "I understand this might be unexpected. Take your time and look around; I hope it makes more sense as you go."
        }
        Reaction::Concerned => {
            "I completely respect that. I know it's unusual, but I made it with good intentions and a lot of respect for you."
        }
    }
}

#[must_use]
pub fn topic_response(topic: ConversationTopic) -> &'static str {
    match topic {
        ConversationTopic::Books => {
            "I always imagined us talking about your favorite books. Which characters stayed with you the most?"
        }
        ConversationTopic::Travel => {
            "Japan, right? You said you wanted to see the cherry blossoms. I'd love to hear where else you want to go, and why."
        }
        ConversationTopic::Philosophy => {
            "The big questions about who we are and why we're here... I'm curious what gives your life meaning."
        }
        ConversationTopic::Dreams => {
            "Everyone keeps a few dreams close. I'd love to hear yours, the ones that make you smile when nobody's looking."
        }
    }
}

#[must_use]
pub fn growth_response(value: GrowthValue) -> &'static str {
    match value {
        GrowthValue::Challenges => {
            "The way you face challenges says a lot about you. I admire that you don't run from hard things."
        }
        GrowthValue::Learning => {
            "Your curiosity is one of your loveliest traits. You always want to know more about the world around you."
        }
        GrowthValue::Connection => {
            "We tend to grow most through other people. How much you value real connection says a lot about you."
        }
    }
}
