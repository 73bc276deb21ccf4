use serde::{Deserialize, Serialize};

/// Round to currency precision (2 decimals, half away from zero)
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One sampled point of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    /// Period label, e.g. "Ano 3" or "Mês 12"
    pub label: String,
    /// Accumulated amount, rounded to cents
    pub amount: f64,
}

/// Chronological sequence of sampled amounts, starting at period 0
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueSeries {
    points: Vec<ValuePoint>,
}

impl ValueSeries {
    pub fn points(&self) -> &[ValuePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValuePoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&ValuePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ValuePoint> {
        self.points.last()
    }

    /// Smallest and largest sampled amount
    pub fn amount_bounds(&self) -> Option<(f64, f64)> {
        let mut amounts = self.points.iter().map(|p| p.amount);
        let first = amounts.next()?;
        Some(amounts.fold((first, first), |(lo, hi), a| (lo.min(a), hi.max(a))))
    }
}

impl FromIterator<ValuePoint> for ValueSeries {
    fn from_iter<T: IntoIterator<Item = ValuePoint>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ValueSeries {
    type Item = &'a ValuePoint;
    type IntoIter = std::slice::Iter<'a, ValuePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for ValueSeries {
    type Item = ValuePoint;
    type IntoIter = std::vec::IntoIter<ValuePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
