use rand::Rng;

/// Which side of the game a word belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Personally identifying terms the player has to eat
    Sensitive,
    /// Harmless terms that cost a life when eaten
    Ordinary,
}

/// A word placed on the grid, tagged with its category at placement time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    pub text: &'static str,
    pub category: Category,
}

impl Word {
    pub const fn sensitive(text: &'static str) -> Self {
        Self { text, category: Category::Sensitive }
    }

    pub const fn ordinary(text: &'static str) -> Self {
        Self { text, category: Category::Ordinary }
    }

    pub fn is_sensitive(&self) -> bool {
        self.category == Category::Sensitive
    }
}

const SENSITIVE: &[&str] = &[
    "Full Name",
    "First Name",
    "Last Name",
    "Date of Birth",
    "Address",
    "Home Address",
    "Mailing Address",
    "Phone Number",
    "Email Address",
    "Social Security Number",
    "SSN",
    "Driver's License Number",
];

const ORDINARY: &[&str] = &[
    "Apple", "Book", "Parrot", "Mountain", "Cloud", "Code", "Pencil", "Puppy", "Dance", "Waterfall",
];

/// The two fixed word lists
pub struct WordBank;

impl WordBank {
    pub fn words(category: Category) -> &'static [&'static str] {
        match category {
            Category::Sensitive => SENSITIVE,
            Category::Ordinary => ORDINARY,
        }
    }

    /// Uniform pick with replacement
    pub fn sample<R: Rng + ?Sized>(category: Category, rng: &mut R) -> Word {
        let words = Self::words(category);
        Word {
            text: words[rng.random_range(0..words.len())],
            category,
        }
    }
}
