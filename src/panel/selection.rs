/// The tag the user has pivoted into, if any.
///
/// Invariant kept by the tracker: after every tag-set recomputation the
/// selection is either empty or a member of the current tag set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    tag: Option<String>,
}

impl Selection {
    pub fn get(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.get() == Some(tag)
    }

    pub fn select(&mut self, tag: &str) {
        self.tag = Some(tag.to_string());
    }

    pub fn clear(&mut self) {
        self.tag = None;
    }

    /// Drop the selection if it is not in `tags`. Returns whether anything changed.
    pub fn reconcile(&mut self, tags: &[String]) -> bool {
        match &self.tag {
            Some(tag) if !tags.contains(tag) => {
                self.tag = None;
                true
            }
            _ => false,
        }
    }
}
