//! Adjustment values: the raw name→value map from the document and its
//! per-preset resolution against declared defaults and clamp ranges.

use std::collections::HashMap;

use crate::errors::FormulaError;
use crate::formula::GuideFormula;
use crate::geometry;
use crate::presets::Catalog;

/// Raw adjustments as supplied by the document layer (`<a:avLst>`).
///
/// Values are in DrawingML units. Non-finite values are dropped on insert so
/// the resolver falls back to the preset default for them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjustmentSet {
    values: HashMap<String, f64>,
}

impl AdjustmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a value; returns `false` (and stores nothing) if it is not finite.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        self.values.insert(name.into(), value);
        true
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Build from `(name, fmla)` guide pairs, evaluated in order.
    ///
    /// A formula may refer to guides defined earlier in the list and to the
    /// fixed angle constants (`cd4`, `3cd4`, ...).
    ///
    /// ```
    /// use prstgeom::AdjustmentSet;
    ///
    /// let adj = AdjustmentSet::from_formulas([("adj1", "val 20000"), ("adj2", "*/ adj1 2 1")]).unwrap();
    /// assert_eq!(adj.get("adj2"), Some(40000.0));
    /// ```
    pub fn from_formulas<'a, I>(guides: I) -> Result<Self, FormulaError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut set = Self::new();
        for (name, fmla) in guides {
            let formula = GuideFormula::parse(fmla)?;
            let value = formula.eval(|guide| set.get(guide).or_else(|| geometry::angle_constant(guide)))?;
            if !set.insert(name, value) {
                return Err(FormulaError::NonFinite { name: name.to_string() });
            }
        }
        Ok(set)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for AdjustmentSet {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Into<String>> Extend<(K, f64)> for AdjustmentSet {
    fn extend<T: IntoIterator<Item = (K, f64)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

/// One adjustment a preset declares: its name, default and optional clamp range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustSpec {
    pub name: &'static str,
    pub default: f64,
    pub range: Option<(f64, f64)>,
}

impl AdjustSpec {
    pub const fn new(name: &'static str, default: f64) -> Self {
        Self {
            name,
            default,
            range: None,
        }
    }

    /// Clamp supplied values to `[min, max]`.
    pub const fn clamp(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    fn resolve(&self, raw: Option<f64>) -> f64 {
        let value = raw.unwrap_or(self.default);
        match self.range {
            Some((min, max)) => {
                let clamped = geometry::pin(min, value, max);
                if clamped != value {
                    crate::log::debug!(adjustment = self.name, value, clamped, "adjustment clamped");
                }
                clamped
            }
            None => value,
        }
    }
}

/// Adjustments resolved for one preset, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedAdjustments {
    values: Vec<(&'static str, f64)>,
}

impl ResolvedAdjustments {
    /// Resolve `raw` against a preset's declared adjustments. Names `raw`
    /// holds that the preset does not declare are ignored.
    pub fn resolve_specs(specs: &[AdjustSpec], raw: &AdjustmentSet) -> Self {
        Self {
            values: specs
                .iter()
                .map(|spec| (spec.name, spec.resolve(raw.get(spec.name))))
                .collect(),
        }
    }

    /// Resolved value, or 0 for a name the preset does not declare.
    pub fn get(&self, name: &str) -> f64 {
        self.lookup(name).unwrap_or(0.0)
    }

    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.values.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.values.iter().copied()
    }
}

/// Resolve raw adjustments for a preset of the standard catalog.
///
/// The preset name is matched case-insensitively. An unknown preset resolves
/// to an empty set; the catalog renders it as a rectangle.
pub fn resolve(preset: &str, raw: &AdjustmentSet) -> ResolvedAdjustments {
    match Catalog::standard().lookup(preset) {
        Some(def) => ResolvedAdjustments::resolve_specs(def.adjustments(), raw),
        None => ResolvedAdjustments::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_drops_non_finite() {
        let mut set = AdjustmentSet::new();
        assert!(!set.insert("adj", f64::NAN));
        assert!(!set.insert("adj", f64::INFINITY));
        assert!(set.is_empty());
        assert!(set.insert("adj", 5.0));
        assert_eq!(set.get("adj"), Some(5.0));
    }

    #[test]
    fn defaults_and_clamps() {
        let specs = [
            AdjustSpec::new("adj1", 16667.0),
            AdjustSpec::new("adj2", 12500.0).clamp(0.0, 25000.0),
        ];
        let raw = AdjustmentSet::new().with("adj2", 90000.0).with("bogus", 1.0);
        let resolved = ResolvedAdjustments::resolve_specs(&specs, &raw);
        assert_eq!(resolved.get("adj1"), 16667.0);
        assert_eq!(resolved.get("adj2"), 25000.0);
        assert_eq!(resolved.lookup("bogus"), None);
        assert_eq!(resolved.get("bogus"), 0.0);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn resolve_round_rect_default() {
        let resolved = resolve("roundRect", &AdjustmentSet::new());
        assert_eq!(resolved.get("adj"), 16667.0);
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let raw = AdjustmentSet::new().with("adj", 30000.0);
        assert_eq!(resolve("ROUNDRECT", &raw).get("adj"), 30000.0);
    }

    #[test]
    fn resolve_scroll_clamps() {
        let raw = AdjustmentSet::new().with("adj", 40000.0);
        assert_eq!(resolve("verticalScroll", &raw).get("adj"), 25000.0);
        let raw = AdjustmentSet::new().with("adj", -10.0);
        assert_eq!(resolve("horizontalScroll", &raw).get("adj"), 0.0);
    }

    #[test]
    fn resolve_unknown_preset_is_empty() {
        let raw = AdjustmentSet::new().with("adj", 1.0);
        assert!(resolve("notAShape", &raw).is_empty());
    }

    #[test]
    fn from_formulas_chains() {
        let set = AdjustmentSet::from_formulas([("adj1", "val 5400000"), ("adj2", "+- adj1 cd4 0")]).unwrap();
        assert_eq!(set.get("adj1"), Some(5_400_000.0));
        assert_eq!(set.get("adj2"), Some(10_800_000.0));
    }

    #[test]
    fn from_formulas_rejects_box_guides() {
        assert!(AdjustmentSet::from_formulas([("adj", "*/ w 1 2")]).is_err());
    }

    #[test]
    fn collect_from_pairs() {
        let set: AdjustmentSet = [("adj1", 1.0), ("adj2", f64::NAN)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
