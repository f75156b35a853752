use crate::types::{FacetGroup, Selection};
use std::collections::BTreeSet;

impl Selection {
    /// Options chosen in a group
    pub fn group(&self, group: FacetGroup) -> &BTreeSet<String> {
        match group {
            FacetGroup::Type => &self.kind,
            FacetGroup::Tech => &self.tech,
            FacetGroup::Color => &self.color,
        }
    }

    fn group_mut(&mut self, group: FacetGroup) -> &mut BTreeSet<String> {
        match group {
            FacetGroup::Type => &mut self.kind,
            FacetGroup::Tech => &mut self.tech,
            FacetGroup::Color => &mut self.color,
        }
    }

    pub fn contains(&self, group: FacetGroup, option: &str) -> bool {
        self.group(group).contains(option)
    }

    /// True when no group constrains the result
    pub fn is_empty(&self) -> bool {
        FacetGroup::ALL.iter().all(|g| self.group(*g).is_empty())
    }

    /// New selection with `option` flipped in `group`; other groups are copied as-is.
    /// Options are not checked against the facet domain.
    #[must_use]
    pub fn toggled(&self, group: FacetGroup, option: &str) -> Selection {
        let mut next = self.clone();
        let set = next.group_mut(group);
        if !set.remove(option) {
            set.insert(option.to_string());
        }
        next
    }

    /// Selection with every group empty
    #[must_use]
    pub fn cleared() -> Selection {
        Selection::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let empty = Selection::default();
        let once = empty.toggled(FacetGroup::Tech, "NoFrost");
        assert!(once.contains(FacetGroup::Tech, "NoFrost"));
        assert!(!empty.contains(FacetGroup::Tech, "NoFrost"));

        let twice = once.toggled(FacetGroup::Tech, "NoFrost");
        assert_eq!(twice, empty);
    }

    #[test]
    fn test_toggle_leaves_other_groups() {
        let sel = Selection::default()
            .toggled(FacetGroup::Type, "Однокамерный")
            .toggled(FacetGroup::Color, "Белый");
        let next = sel.toggled(FacetGroup::Tech, "Inverter");
        assert_eq!(next.kind, sel.kind);
        assert_eq!(next.color, sel.color);
        assert_eq!(next.tech.len(), 1);
    }

    #[test]
    fn test_toggles_commute() {
        let a = Selection::default()
            .toggled(FacetGroup::Type, "Side-by-Side")
            .toggled(FacetGroup::Color, "Черный")
            .toggled(FacetGroup::Type, "Многокамерный");
        let b = Selection::default()
            .toggled(FacetGroup::Type, "Многокамерный")
            .toggled(FacetGroup::Type, "Side-by-Side")
            .toggled(FacetGroup::Color, "Черный");
        assert_eq!(a, b);
    }

    #[test]
    fn test_toggle_accepts_unknown_option() {
        let sel = Selection::default().toggled(FacetGroup::Color, "Розовый");
        assert!(sel.contains(FacetGroup::Color, "Розовый"));
    }

    #[test]
    fn test_cleared() {
        let sel = Selection::default()
            .toggled(FacetGroup::Type, "Однокамерный")
            .toggled(FacetGroup::Tech, "NoFrost");
        assert!(!sel.is_empty());
        let cleared = Selection::cleared();
        assert!(cleared.is_empty());
        assert_eq!(cleared, Selection::cleared());
    }

    #[test]
    fn test_selection_json_keys() {
        let sel = Selection::default().toggled(FacetGroup::Type, "Однокамерный");
        let json = serde_json::to_string(&sel).unwrap();
        assert_eq!(
            json,
            r#"{"type":["Однокамерный"],"tech":[],"color":[]}"#
        );
    }
}

#[cfg(test)]
pub(crate) mod strategies {
    use crate::catalog::default_facets;
    use crate::types::{FacetGroup, Selection};
    use proptest::prelude::*;

    /// One (group, option) toggle: any configured option or a value outside the domain
    pub(crate) fn arb_toggle() -> impl Strategy<Value = (FacetGroup, String)> {
        prop_oneof![
            Just(FacetGroup::Type),
            Just(FacetGroup::Tech),
            Just(FacetGroup::Color),
        ]
        .prop_flat_map(|group| {
            let mut options = default_facets()[&group].options.clone();
            options.push("Неизвестно".to_string());
            options.push(String::new());
            (Just(group), prop::sample::select(options))
        })
    }

    pub(crate) fn arb_toggles() -> impl Strategy<Value = Vec<(FacetGroup, String)>> {
        prop::collection::vec(arb_toggle(), 0..16)
    }

    /// Selection reached from the empty one by a random toggle sequence
    pub(crate) fn arb_selection() -> impl Strategy<Value = Selection> {
        arb_toggles().prop_map(|toggles| apply(&Selection::default(), &toggles))
    }

    pub(crate) fn apply(start: &Selection, toggles: &[(FacetGroup, String)]) -> Selection {
        toggles
            .iter()
            .fold(start.clone(), |sel, (group, option)| sel.toggled(*group, option))
    }
}
