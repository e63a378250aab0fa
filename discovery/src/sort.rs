use crate::query::SortKey;
use crate::record::ProjectRecord;
use icu_collator::Collator;
use icu_collator::CollatorBorrowed;
use icu_collator::CollatorPreferences;
use icu_collator::options::CollatorOptions;
use icu_locale_core::Locale;
use std::cmp::Ordering;
use std::fmt;
use time::OffsetDateTime;
use tracing::warn;

/// Locale-aware title comparison.
///
/// Falls back to lowercase-then-code-point order when no collation data is
/// available for the locale.
pub struct TitleCollator {
    collator: Option<CollatorBorrowed<'static>>,
}

impl TitleCollator {
    pub fn for_locale(locale: &Locale) -> Self {
        let preferences = CollatorPreferences::from(locale);
        match Collator::try_new(preferences, CollatorOptions::default()) {
            Ok(collator) => Self {
                collator: Some(collator),
            },
            Err(err) => {
                warn!("no collator for locale {locale}, using code point order: {err}");
                Self::code_point()
            }
        }
    }

    pub fn code_point() -> Self {
        Self { collator: None }
    }

    pub fn is_locale_aware(&self) -> bool {
        self.collator.is_some()
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(left, right),
            None => left
                .to_lowercase()
                .cmp(&right.to_lowercase())
                .then_with(|| left.cmp(right)),
        }
    }
}

impl fmt::Debug for TitleCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleCollator")
            .field("locale_aware", &self.is_locale_aware())
            .finish()
    }
}

/// Orders `subset` by `key` into a new vector. The sort is stable, so equal
/// keys keep their filter order; records without a parseable `createdAt`
/// sort as the smallest timestamp.
pub fn sort_projects<'a>(
    subset: &[&'a ProjectRecord],
    key: SortKey,
    collator: &TitleCollator,
) -> Vec<&'a ProjectRecord> {
    match key {
        SortKey::Newest => sort_by_created(subset, |left, right| right.cmp(left)),
        SortKey::Oldest => sort_by_created(subset, Ord::cmp),
        SortKey::TitleAsc => sort_by_title(subset, |left, right| collator.compare(left, right)),
        SortKey::TitleDesc => sort_by_title(subset, |left, right| collator.compare(right, left)),
        SortKey::Unsorted => subset.to_vec(),
    }
}

fn sort_by_created<'a>(
    subset: &[&'a ProjectRecord],
    order: impl Fn(&Option<OffsetDateTime>, &Option<OffsetDateTime>) -> Ordering,
) -> Vec<&'a ProjectRecord> {
    let mut keyed: Vec<(Option<OffsetDateTime>, &'a ProjectRecord)> = subset
        .iter()
        .map(|record| (record.created_at(), *record))
        .collect();
    keyed.sort_by(|left, right| order(&left.0, &right.0));
    keyed.into_iter().map(|(_, record)| record).collect()
}

fn sort_by_title<'a>(
    subset: &[&'a ProjectRecord],
    order: impl Fn(&str, &str) -> Ordering,
) -> Vec<&'a ProjectRecord> {
    let mut sorted = subset.to_vec();
    sorted.sort_by(|left, right| order(left.title(), right.title()));
    sorted
}
