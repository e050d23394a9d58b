/// Next expanded key after activating `key`.
///
/// Activating the expanded key collapses it; any other key replaces the selection.
pub fn toggle(key: &str, current: Option<&str>) -> Option<String> {
    if current == Some(key) {
        None
    } else {
        Some(key.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisclosureAction {
    ToggleSkill(String),
    ToggleCourse(String),
}

/// Expanded skill and course card, at most one of each
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureState {
    pub expanded_skill: Option<String>,
    pub expanded_course: Option<String>,
}

impl DisclosureState {
    pub fn reduce(self, action: DisclosureAction) -> Self {
        match action {
            DisclosureAction::ToggleSkill(key) => Self {
                expanded_skill: toggle(&key, self.expanded_skill.as_deref()),
                ..self
            },
            DisclosureAction::ToggleCourse(key) => Self {
                expanded_course: toggle(&key, self.expanded_course.as_deref()),
                ..self
            },
        }
    }

    pub fn is_skill_expanded(&self, name: &str) -> bool {
        self.expanded_skill.as_deref() == Some(name)
    }

    pub fn is_course_expanded(&self, title: &str) -> bool {
        self.expanded_course.as_deref() == Some(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn skill(key: &str) -> DisclosureAction {
        DisclosureAction::ToggleSkill(key.to_string())
    }

    fn course(key: &str) -> DisclosureAction {
        DisclosureAction::ToggleCourse(key.to_string())
    }

    #[test]
    fn test_initially_nothing_expanded() {
        let state = DisclosureState::default();
        assert_eq!(state.expanded_skill, None);
        assert_eq!(state.expanded_course, None);
    }

    #[test]
    fn test_toggle_react_twice() {
        let state = DisclosureState::default().reduce(skill("React"));
        assert!(state.is_skill_expanded("React"));

        let state = state.reduce(skill("React"));
        assert_eq!(state.expanded_skill, None);
    }

    #[test]
    fn test_unknown_key_is_accepted() {
        let state = DisclosureState::default().reduce(skill("COBOL"));
        assert_eq!(state.expanded_skill.as_deref(), Some("COBOL"));
    }

    proptest! {
        #[test]
        fn test_toggle_twice_returns_to_none(key in ".*") {
            let once = toggle(&key, None);
            prop_assert_eq!(toggle(&key, once.as_deref()), None);
        }

        #[test]
        fn test_second_key_replaces_first(k1 in "[a-zA-Z+#. ]{1,16}", k2 in "[a-zA-Z+#. ]{1,16}") {
            prop_assume!(k1 != k2);
            let state = DisclosureState::default()
                .reduce(skill(&k1))
                .reduce(skill(&k2));
            prop_assert!(state.is_skill_expanded(&k2));
            prop_assert!(!state.is_skill_expanded(&k1));
        }

        #[test]
        fn test_skills_and_courses_independent(s in ".{0,12}", c in ".{0,12}") {
            let state = DisclosureState::default().reduce(skill(&s));
            let after = state.clone().reduce(course(&c));
            prop_assert_eq!(&after.expanded_skill, &state.expanded_skill);

            let again = after.clone().reduce(skill(&s));
            prop_assert_eq!(&again.expanded_course, &after.expanded_course);
        }
    }
}
