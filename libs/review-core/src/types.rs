//! Core types for the review tracker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mastery status derived from a problem's review history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    NotStarted,
    InProgress,
    DueForReview,
    Mastered,
}

impl Default for Status {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Problem category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Array,
    HashTable,
    TwoPointers,
    SlidingWindow,
    LinkedList,
    BinaryTree,
    DfsBfs,
    DynamicProgramming,
    Backtracking,
    Greedy,
    HeapStack,
    Graph,
    Strings,
    BinarySearch,
    Other,
}

impl Default for Topic {
    fn default() -> Self {
        Self::Array
    }
}

impl Topic {
    /// Every category, in display order.
    pub const ALL: [Topic; 15] = [
        Self::Array,
        Self::HashTable,
        Self::TwoPointers,
        Self::SlidingWindow,
        Self::LinkedList,
        Self::BinaryTree,
        Self::DfsBfs,
        Self::DynamicProgramming,
        Self::Backtracking,
        Self::Greedy,
        Self::HeapStack,
        Self::Graph,
        Self::Strings,
        Self::BinarySearch,
        Self::Other,
    ];

    /// Get the topic name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::HashTable => "hash_table",
            Self::TwoPointers => "two_pointers",
            Self::SlidingWindow => "sliding_window",
            Self::LinkedList => "linked_list",
            Self::BinaryTree => "binary_tree",
            Self::DfsBfs => "dfs_bfs",
            Self::DynamicProgramming => "dynamic_programming",
            Self::Backtracking => "backtracking",
            Self::Greedy => "greedy",
            Self::HeapStack => "heap_stack",
            Self::Graph => "graph",
            Self::Strings => "strings",
            Self::BinarySearch => "binary_search",
            Self::Other => "other",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

/// Problem difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl Difficulty {
    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// One recorded review outcome. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub reviewed_at: DateTime<Utc>,
    pub success: bool,
}

impl Review {
    pub fn new(reviewed_at: DateTime<Utc>, success: bool) -> Self {
        Self {
            reviewed_at,
            success,
        }
    }
}

/// One tracked practice problem.
///
/// `reviews` is insertion-ordered, which is also chronological order.
/// `next_due` is `Some` exactly when `reviews` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Unique across all problems; uniqueness is enforced by the catalog.
    pub id: i64,
    pub name: String,
    pub topic: Topic,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub reviews: Vec<Review>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due: Option<DateTime<Utc>>,
}

impl Problem {
    /// Create a problem with an empty review history and no due date.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        topic: Topic,
        difficulty: Difficulty,
        notes: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            topic,
            difficulty,
            notes,
            created_at,
            reviews: Vec::new(),
            next_due: None,
        }
    }

    /// Number of successful reviews across the whole history.
    pub fn success_count(&self) -> usize {
        self.reviews.iter().filter(|r| r.success).count()
    }
}

/// Per-status totals for a set of problems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub mastered: usize,
    pub due_for_review: usize,
    pub in_progress: usize,
    pub not_started: usize,
}
