//! Content Area Scenario Tests
//!
//! End-to-end sequences of create / move / delete against one area.

#[cfg(test)]
mod tests {
    use crate::{
        ContentArea, ContentItem, DeleteState, Direction, FactoryError, FlexibleContentConfig, FormFields,
        ItemCollection, ItemTypeConfig, Prefix, PrefixList, SubmittedForm,
    };

    fn config() -> FlexibleContentConfig {
        FlexibleContentConfig {
            types: vec![
                ItemTypeConfig {
                    slug: "plain-text".to_string(),
                    name: Some("Plain Text".to_string()),
                    description: String::new(),
                    template: concat!(
                        "<input type=\"hidden\" name=\"fc-item-PLACEHOLDER-ct\" value=\"plain-text\">\n",
                        "<input type=\"hidden\" class=\"fc-ordering\" name=\"fc-item-PLACEHOLDER-ordering\">\n",
                        "<textarea name=\"fc-item-PLACEHOLDER-text\"></textarea>"
                    )
                    .to_string(),
                },
                ItemTypeConfig {
                    slug: "video".to_string(),
                    name: Some("Video".to_string()),
                    description: String::new(),
                    template: "<input name=\"fc-item-PLACEHOLDER-video_id\">".to_string(),
                },
            ],
            ..FlexibleContentConfig::default()
        }
    }

    fn empty_area() -> ContentArea {
        ContentArea::new(config().into_factory().expect("valid config"))
    }

    fn area_with(prefixes: &[&str]) -> ContentArea {
        let items: ItemCollection = prefixes
            .iter()
            .map(|p| ContentItem::adopted(Prefix::from(*p), None, String::new(), false))
            .collect();
        ContentArea::with_items(config().into_factory().expect("valid config"), items)
    }

    fn orderings(area: &ContentArea) -> Vec<u32> {
        area.items().iter().map(ContentItem::ordering).collect()
    }

    fn order(area: &ContentArea) -> Vec<String> {
        area.items().prefixes().map(|p| p.to_string()).collect()
    }

    fn assert_consistent(area: &ContentArea) {
        let metadata = area.metadata();
        assert_eq!(metadata.count, area.items().len());
        assert_eq!(PrefixList::parse(metadata.prefix_list.as_str()).len(), metadata.count);
        let expected: Vec<u32> = (1..=metadata.count as u32).collect();
        assert_eq!(orderings(area), expected);
    }

    #[test]
    fn test_n_creations() {
        for n in 0..6u32 {
            let mut area = empty_area();
            for _ in 0..n {
                area.create_item("plain-text").unwrap();
            }
            assert_eq!(area.metadata().count, n as usize);
            assert_eq!(orderings(&area), (1..=n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_worked_example() {
        let mut area = area_with(&["a", "b"]);
        let new = area.create_item("video").unwrap();

        assert_eq!(area.metadata().count, 3);
        assert_eq!(orderings(&area), vec![1, 2, 3]);
        assert_eq!(area.metadata().prefix_list.as_str(), format!("a,b,{}", new));

        assert!(area.move_item(&new, Direction::Up));
        assert_eq!(orderings(&area), vec![1, 2, 3]);
        assert_eq!(area.metadata().prefix_list.as_str(), format!("a,{},b", new));
    }

    #[test]
    fn test_boundary_moves_are_noops() {
        let mut area = area_with(&["fc-item-1", "fc-item-2", "fc-item-3"]);
        let before_order = order(&area);
        let before_meta = area.metadata().clone();

        assert!(!area.move_up(&Prefix::from("fc-item-1")));
        assert!(!area.move_down(&Prefix::from("fc-item-3")));
        assert!(!area.move_up(&Prefix::from("missing")));

        assert_eq!(order(&area), before_order);
        assert_eq!(area.metadata(), &before_meta);
        assert_consistent(&area);
    }

    #[test]
    fn test_up_then_down_restores() {
        let mut area = area_with(&["fc-item-1", "fc-item-2", "fc-item-3", "fc-item-4"]);
        let before_order = order(&area);
        let before_meta = area.metadata().clone();
        let target = Prefix::from("fc-item-3");

        assert!(area.move_up(&target));
        assert_eq!(area.item(&target).map(ContentItem::ordering), Some(2));
        assert!(area.move_down(&target));

        assert_eq!(order(&area), before_order);
        assert_eq!(area.metadata(), &before_meta);
    }

    #[test]
    fn test_delete_toggle_twice_restores() {
        let mut area = area_with(&["fc-item-1", "fc-item-2"]);
        let before_meta = area.metadata().clone();
        let target = Prefix::from("fc-item-2");

        assert_eq!(area.toggle_deleted(&target), Some(DeleteState::MarkedDeleted));
        assert_eq!(area.metadata().count, 2);
        assert_eq!(area.metadata(), &before_meta);

        assert_eq!(area.toggle_deleted(&target), Some(DeleteState::Active));
        assert_eq!(area.item(&target).map(ContentItem::is_deleted), Some(false));
        assert_eq!(area.metadata(), &before_meta);
        assert_consistent(&area);

        assert_eq!(area.toggle_deleted(&Prefix::from("nope")), None);
    }

    #[test]
    fn test_unknown_type_leaves_area_unchanged() {
        let mut area = area_with(&["fc-item-1"]);
        let before_order = order(&area);
        let before_meta = area.metadata().clone();
        let before_counter = area.factory().counter().clone();

        let err = area.create_item("carousel").unwrap_err();
        assert_eq!(err, FactoryError::UnknownType { type_id: "carousel".to_string() });

        assert_eq!(order(&area), before_order);
        assert_eq!(area.metadata(), &before_meta);
        assert_eq!(area.factory().counter(), &before_counter);
    }

    #[test]
    fn test_prefixes_never_reused() {
        let mut area = area_with(&["fc-item-1", "fc-item-5"]);
        let first = area.create_item("plain-text").unwrap();
        assert_eq!(first.as_str(), "fc-item-6");

        area.toggle_deleted(&first);
        let second = area.create_item("plain-text").unwrap();
        assert_eq!(second.as_str(), "fc-item-7");

        let all = order(&area);
        let mut unique = all.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn test_create_after_max_stamp_aborts_cleanly() {
        let max = format!("fc-item-{}", u64::MAX);
        let mut area = area_with(&["fc-item-1", max.as_str()]);
        let before = order(&area);

        let err = area.create_item("plain-text").unwrap_err();
        assert_eq!(err, FactoryError::CounterExhausted { last: u64::MAX });
        assert!(err.user_message().starts_with("Sorry, something went wrong."));

        assert_eq!(order(&area), before);
        assert_eq!(area.metadata().count, 2);
        assert!(!order(&area).contains(&"fc-item-0".to_string()));
        assert_consistent(&area);
    }

    #[test]
    fn test_mixed_sequence_keeps_invariants() {
        let mut area = empty_area();
        assert_consistent(&area);

        let a = area.create_item("plain-text").unwrap();
        let b = area.create_item("video").unwrap();
        let c = area.create_item("plain-text").unwrap();
        assert_consistent(&area);

        area.move_down(&a);
        area.toggle_deleted(&b);
        area.move_up(&c);
        let _ = area.create_item("");
        area.move_down(&c);
        area.synchronize();
        assert_consistent(&area);
        assert_eq!(area.metadata().count, 3);
    }

    #[test]
    fn test_form_fields_round_trip() {
        let mut area = empty_area();
        let a = area.create_item("plain-text").unwrap();
        let b = area.create_item("video").unwrap();
        area.move_up(&b);
        area.toggle_deleted(&a);

        let fields = FormFields::encode(&area);
        assert_eq!(fields.get("fc-prefixes"), Some("fc-item-2,fc-item-1"));
        assert_eq!(fields.get("fc-item-1-ordering"), Some("2"));
        assert_eq!(fields.get("fc-item-1-delete"), Some("1"));

        let submitted = SubmittedForm::parse(fields.into_pairs()).unwrap();
        let decoded: Vec<(String, Option<u32>, bool)> = submitted
            .items()
            .iter()
            .map(|item| (item.prefix.to_string(), item.ordering, item.deleted))
            .collect();
        assert_eq!(
            decoded,
            vec![
                ("fc-item-2".to_string(), Some(1), false),
                ("fc-item-1".to_string(), Some(2), true),
            ]
        );
    }
}
