use crate::entry::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Work,
    Travel,
}

impl Category {
    pub fn matches(self, entry: &Entry) -> bool {
        entry.category() == self
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Travel => "Travel",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Category::Work => "Add a To Do",
            Category::Travel => "Where do you want to go?",
        }
    }
}
