//! Module-type identity
//!
//! A module's identity is the structured pair (category, nominal
//! width) plus its slot span. The legacy external form is a string
//! that encodes the width textually (`single-full-514`); it exists
//! only at the serialization boundary and is regenerated whenever the
//! slot width changes.

use serde::{Deserialize, Serialize};

use crate::core::types::Mm;

/// Vertical band a module occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    /// Full-height cabinet; excludes everything else from its slots
    Full,
    /// Upper cabinet; may share a slot range with a lower cabinet
    Upper,
    /// Lower cabinet; may share a slot range with an upper cabinet
    Lower,
}

impl ModuleCategory {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "full" => Some(Self::Full),
            "upper" => Some(Self::Upper),
            "lower" => Some(Self::Lower),
            _ => None,
        }
    }
}

/// How many adjacent slots a module spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleSpan {
    Single,
    Dual,
}

impl ModuleSpan {
    pub fn slot_count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Dual => 2,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Dual => "dual",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "dual" => Some(Self::Dual),
            _ => None,
        }
    }
}

/// Structured module identity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModuleSpec {
    pub span: ModuleSpan,
    pub category: ModuleCategory,
    /// Nominal carcass width (mm); one slot width for single-span
    /// modules, two for dual-span
    pub nominal_width_mm: Mm,
}

impl ModuleSpec {
    pub fn new(span: ModuleSpan, category: ModuleCategory, nominal_width_mm: Mm) -> Self {
        Self {
            span,
            category,
            nominal_width_mm,
        }
    }

    /// Identity for a module filling its slot(s) in a zone of the
    /// given slot width.
    pub fn for_slot_width(span: ModuleSpan, category: ModuleCategory, slot_width: Mm) -> Self {
        Self {
            span,
            category,
            nominal_width_mm: slot_width * span.slot_count() as Mm,
        }
    }

    pub fn is_dual(&self) -> bool {
        self.span == ModuleSpan::Dual
    }

    /// Same module regenerated for a new slot width.
    pub fn with_slot_width(&self, slot_width: Mm) -> Self {
        Self::for_slot_width(self.span, self.category, slot_width)
    }

    /// Legacy string form, width rounded to whole millimetres.
    pub fn legacy_id(&self) -> String {
        format!(
            "{}-{}-{}",
            self.span.as_str(),
            self.category.as_str(),
            self.nominal_width_mm.round() as i64
        )
    }

    /// Parse the legacy string form. Returns `None` for anything that
    /// does not match `<span>-<category>-<width>`.
    pub fn from_legacy_id(id: &str) -> Option<Self> {
        let mut parts = id.splitn(3, '-');
        let span = ModuleSpan::parse(parts.next()?)?;
        let category = ModuleCategory::parse(parts.next()?)?;
        let width: Mm = parts.next()?.parse().ok()?;
        if !width.is_finite() || width <= 0.0 {
            return None;
        }
        Some(Self {
            span,
            category,
            nominal_width_mm: width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_id_round_trips_every_category() {
        for category in [ModuleCategory::Full, ModuleCategory::Upper, ModuleCategory::Lower] {
            for span in [ModuleSpan::Single, ModuleSpan::Dual] {
                let spec = ModuleSpec::new(span, category, 514.0);
                let parsed = ModuleSpec::from_legacy_id(&spec.legacy_id()).unwrap();
                assert_eq!(parsed, spec);
            }
        }
    }

    #[test]
    fn legacy_id_encodes_rounded_width() {
        let spec = ModuleSpec::for_slot_width(ModuleSpan::Single, ModuleCategory::Full, 3600.0 / 7.0);
        assert_eq!(spec.legacy_id(), "single-full-514");
    }

    #[test]
    fn dual_nominal_width_is_two_slots() {
        let spec = ModuleSpec::for_slot_width(ModuleSpan::Dual, ModuleCategory::Lower, 480.0);
        assert_eq!(spec.nominal_width_mm, 960.0);
        assert_eq!(spec.legacy_id(), "dual-lower-960");
    }

    #[test]
    fn malformed_legacy_ids_parse_to_none() {
        assert!(ModuleSpec::from_legacy_id("").is_none());
        assert!(ModuleSpec::from_legacy_id("single-full").is_none());
        assert!(ModuleSpec::from_legacy_id("triple-full-500").is_none());
        assert!(ModuleSpec::from_legacy_id("single-sideways-500").is_none());
        assert!(ModuleSpec::from_legacy_id("single-full--500").is_none());
        assert!(ModuleSpec::from_legacy_id("single-full-abc").is_none());
    }

    #[test]
    fn regeneration_keeps_span_and_category() {
        let spec = ModuleSpec::for_slot_width(ModuleSpan::Dual, ModuleCategory::Upper, 514.0);
        let regenerated = spec.with_slot_width(480.0);
        assert_eq!(regenerated.span, ModuleSpan::Dual);
        assert_eq!(regenerated.category, ModuleCategory::Upper);
        assert_eq!(regenerated.nominal_width_mm, 960.0);
    }
}
