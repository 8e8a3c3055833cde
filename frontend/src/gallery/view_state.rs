use std::rc::Rc;

use crate::gallery::catalog::{default_catalog, Category, GalleryItem};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Buttons in the order they appear above the grid.
    pub const ALL_OPTIONS: [Filter; 5] = [
        Filter::All,
        Filter::Only(Category::Weights),
        Filter::Only(Category::Cardio),
        Filter::Only(Category::Classes),
        Filter::Only(Category::Facilities),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "הכל",
            Filter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => item.category == *category,
        }
    }
}

/// Filter and lightbox state over an immutable catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryView {
    catalog: Rc<[GalleryItem]>,
    active_filter: Filter,
    selected_item: Option<GalleryItem>,
}

impl Default for GalleryView {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}

impl GalleryView {
    pub fn new(catalog: Rc<[GalleryItem]>) -> Self {
        Self {
            catalog,
            active_filter: Filter::All,
            selected_item: None,
        }
    }

    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.active_filter = filter;
    }

    pub fn visible_items(&self) -> Vec<&GalleryItem> {
        self.catalog.iter().filter(|item| self.active_filter.matches(item)).collect()
    }

    /// True when the active filter matches nothing.
    pub fn is_empty(&self) -> bool {
        !self.catalog.iter().any(|item| self.active_filter.matches(item))
    }

    pub fn selected(&self) -> Option<&GalleryItem> {
        self.selected_item.as_ref()
    }

    pub fn select(&mut self, item: GalleryItem) {
        self.selected_item = Some(item);
    }

    pub fn deselect(&mut self) {
        self.selected_item = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(view: &GalleryView) -> Vec<u32> {
        view.visible_items().iter().map(|item| item.id).collect()
    }

    #[test]
    fn defaults_to_whole_catalog() {
        let view = GalleryView::default();
        assert_eq!(view.active_filter(), Filter::All);
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(view.selected().is_none());
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let mut view = GalleryView::default();
        view.set_filter(Filter::Only(Category::Weights));
        assert_eq!(ids(&view), vec![1, 8]);
        view.set_filter(Filter::Only(Category::Facilities));
        assert_eq!(ids(&view), vec![5, 6, 7]);
        view.set_filter(Filter::All);
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn filtering_twice_is_idempotent() {
        let mut view = GalleryView::default();
        view.set_filter(Filter::Only(Category::Classes));
        let first = ids(&view);
        view.set_filter(Filter::Only(Category::Classes));
        assert_eq!(ids(&view), first);
        assert_eq!(first, vec![3, 4]);
    }

    #[test]
    fn empty_category_is_signaled() {
        let catalog: Rc<[GalleryItem]> = default_catalog()
            .iter()
            .filter(|item| item.category != Category::Cardio)
            .cloned()
            .collect();
        let mut view = GalleryView::new(catalog);
        assert!(!view.is_empty());
        view.set_filter(Filter::Only(Category::Cardio));
        assert!(view.is_empty());
        assert!(view.visible_items().is_empty());
    }

    #[test]
    fn select_then_deselect() {
        let mut view = GalleryView::default();
        let item = view.visible_items()[2].clone();
        view.select(item.clone());
        assert_eq!(view.selected(), Some(&item));
        view.deselect();
        assert!(view.selected().is_none());
        view.deselect();
        assert!(view.selected().is_none());
    }

    #[test]
    fn labels_follow_button_order() {
        let labels: Vec<_> = Filter::ALL_OPTIONS.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["הכל", "משקולות", "קרדיו", "שיעורים", "מתקנים"]);
    }
}
