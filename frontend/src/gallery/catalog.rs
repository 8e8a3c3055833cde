use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Weights,
    Cardio,
    Classes,
    Facilities,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Weights => "משקולות",
            Category::Cardio => "קרדיו",
            Category::Classes => "שיעורים",
            Category::Facilities => "מתקנים",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: u32,
    pub image_ref: &'static str,
    pub alt_text: &'static str,
    pub caption: &'static str,
    pub category: Category,
}

/// The photos shown on the landing page, in display order.
pub fn default_catalog() -> Rc<[GalleryItem]> {
    Rc::from(vec![
        GalleryItem {
            id: 1,
            image_ref: "/images/weights-area.jpg",
            alt_text: "אזור המשקולות במכון כושר ביתא",
            caption: "אזור המשקולות המתקדם שלנו",
            category: Category::Weights,
        },
        GalleryItem {
            id: 2,
            image_ref: "/images/cardio-section.jpg",
            alt_text: "אזור הקרדיו במכון כושר ביתא",
            caption: "מכשירי קרדיו חדישים",
            category: Category::Cardio,
        },
        GalleryItem {
            id: 3,
            image_ref: "/images/class-space.jpg",
            alt_text: "אזור השיעורים במכון כושר ביתא",
            caption: "אולם השיעורים המרווח",
            category: Category::Classes,
        },
        GalleryItem {
            id: 4,
            image_ref: "/images/personal-training.jpg",
            alt_text: "אימון אישי במכון כושר ביתא",
            caption: "אימונים אישיים עם מדריכים מוסמכים",
            category: Category::Classes,
        },
        GalleryItem {
            id: 5,
            image_ref: "/images/locker-room.jpg",
            alt_text: "חדרי הלבשה במכון כושר ביתא",
            caption: "חדרי הלבשה מפנקים",
            category: Category::Facilities,
        },
        GalleryItem {
            id: 6,
            image_ref: "/images/nutrition-bar.jpg",
            alt_text: "בר תזונה במכון כושר ביתא",
            caption: "בר תזונה עשיר בחלבונים",
            category: Category::Facilities,
        },
        GalleryItem {
            id: 7,
            image_ref: "/images/stretching-area.jpg",
            alt_text: "אזור מתיחות במכון כושר ביתא",
            caption: "אזור מתיחות ושחרור",
            category: Category::Facilities,
        },
        GalleryItem {
            id: 8,
            image_ref: "/images/functional-training.jpg",
            alt_text: "אימון פונקציונלי במכון כושר ביתא",
            caption: "אזור אימון פונקציונלי",
            category: Category::Weights,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let catalog = default_catalog();
        let ids: HashSet<_> = catalog.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(catalog.len(), 8);
    }
}
