//! EPA breakpoint tables for particulate matter.
//!
//! Each pollutant species gets its own ordered table of category breakpoints,
//! since the health-impact curves for PM2.5 and PM10 differ. The bound values
//! are the published EPA breakpoints; see
//! https://en.wikipedia.org/wiki/Air_quality_index#Computing_the_AQI

/// AQI severity categories, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    Severe,
}

impl Category {
    /// Human-readable label matching the EPA category names.
    ///
    /// # Examples
    ///
    /// ```
    /// use aqi::Category;
    ///
    /// assert_eq!(Category::Moderate.label(), "Moderate");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Moderate => "Moderate",
            Category::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Category::Unhealthy => "Unhealthy",
            Category::VeryUnhealthy => "Very Unhealthy",
            Category::Hazardous => "Hazardous",
            Category::Severe => "Severe",
        }
    }

    /// EPA display color for this category.
    ///
    /// The EPA color scale stops at Hazardous, so the categories above it
    /// share its color.
    pub fn color(self) -> Color {
        match self {
            Category::Good => Color::Green,
            Category::Moderate => Color::Yellow,
            Category::UnhealthyForSensitiveGroups => Color::Orange,
            Category::Unhealthy => Color::Red,
            Category::VeryUnhealthy => Color::Purple,
            Category::Hazardous | Category::Severe => Color::DarkPurple,
        }
    }
}

/// Color enum provides colors corresponding to EPA AQI levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    DarkPurple,
}

/// Particulate pollutant species with a defined breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pollutant {
    Pm2_5,
    Pm10,
}

impl Pollutant {
    /// The built-in breakpoint table for this species.
    pub fn table(self) -> &'static BreakpointTable<'static> {
        match self {
            Pollutant::Pm2_5 => &PM2_5_TABLE,
            Pollutant::Pm10 => &PM10_TABLE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Pollutant::Pm2_5 => "PM2.5",
            Pollutant::Pm10 => "PM10",
        }
    }
}

/// One category's entry in a breakpoint table: an inclusive concentration
/// range in µg/m³ mapped to an inclusive AQI sub-range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub concentration_low: f32,
    pub concentration_high: f32,
    pub index_low: u16,
    pub index_high: u16,
    pub category: Category,
}

/// A structural defect in a breakpoint table, reported by
/// [`BreakpointTable::new`] and [`BreakpointTable::validate`].
///
/// These are configuration errors: they are detected when a table is
/// constructed, before any reading is processed, never per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The table has no entries.
    Empty,
    /// An entry's concentration or index bounds are not strictly increasing.
    InvertedBounds { entry: usize },
    /// An entry's concentration range overlaps the previous entry's.
    Overlap { entry: usize },
    /// The table leaves a hole: it does not start at zero, an entry's
    /// concentration range sits more than one reporting quantum above the
    /// previous one, or the index sub-ranges are not contiguous.
    Gap { entry: usize },
}

// The published tables are quantized to 0.1 µg/m³ (PM2.5) or whole µg/m³
// (PM10), so adjacent ranges may differ by at most one whole unit.
const MAX_RANGE_STEP: f32 = 1.0;

/// An ordered, validated set of category breakpoints for one pollutant
/// species. Immutable once constructed; the two built-in instances are
/// [`PM2_5_TABLE`] and [`PM10_TABLE`].
#[derive(Debug)]
pub struct BreakpointTable<'a> {
    entries: &'a [Breakpoint],
}

impl<'a> BreakpointTable<'a> {
    /// Builds a table from caller-supplied breakpoints, rejecting any set
    /// that violates the structural invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use aqi::{BreakpointTable, TableError};
    ///
    /// assert_eq!(BreakpointTable::new(&[]), Err(TableError::Empty));
    /// ```
    pub fn new(entries: &'a [Breakpoint]) -> Result<Self, TableError> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    /// Checks the structural invariants: entries present, every entry's
    /// bounds strictly increasing, ranges ascending without overlap, and no
    /// hole in either the concentration coverage or the index sub-ranges.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.entries.is_empty() {
            return Err(TableError::Empty);
        }

        for (i, bp) in self.entries.iter().enumerate() {
            // The negated comparison also rejects NaN bounds.
            if !(bp.concentration_low < bp.concentration_high) || bp.index_low >= bp.index_high {
                return Err(TableError::InvertedBounds { entry: i });
            }
        }

        if self.entries[0].concentration_low != 0.0 {
            return Err(TableError::Gap { entry: 0 });
        }

        for i in 1..self.entries.len() {
            let prev = &self.entries[i - 1];
            let cur = &self.entries[i];
            if cur.concentration_low <= prev.concentration_high {
                return Err(TableError::Overlap { entry: i });
            }
            if cur.concentration_low - prev.concentration_high > MAX_RANGE_STEP {
                return Err(TableError::Gap { entry: i });
            }
            if cur.index_low != prev.index_high + 1 {
                return Err(TableError::Gap { entry: i });
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[Breakpoint] {
        self.entries
    }

    /// Highest concentration the table covers. Readings above this yield the
    /// out-of-range outcome.
    pub fn ceiling(&self) -> f32 {
        match self.entries.last() {
            Some(bp) => bp.concentration_high,
            None => 0.0,
        }
    }
}

// PM2.5 breakpoints, µg/m³ (CF=1).
const PM2_5_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint {
        concentration_low: 0.0,
        concentration_high: 12.0,
        index_low: 0,
        index_high: 50,
        category: Category::Good,
    },
    Breakpoint {
        concentration_low: 12.1,
        concentration_high: 35.4,
        index_low: 51,
        index_high: 100,
        category: Category::Moderate,
    },
    Breakpoint {
        concentration_low: 35.5,
        concentration_high: 55.4,
        index_low: 101,
        index_high: 150,
        category: Category::UnhealthyForSensitiveGroups,
    },
    Breakpoint {
        concentration_low: 55.5,
        concentration_high: 150.4,
        index_low: 151,
        index_high: 200,
        category: Category::Unhealthy,
    },
    Breakpoint {
        concentration_low: 150.5,
        concentration_high: 250.4,
        index_low: 201,
        index_high: 300,
        category: Category::VeryUnhealthy,
    },
    Breakpoint {
        concentration_low: 250.5,
        concentration_high: 350.4,
        index_low: 301,
        index_high: 400,
        category: Category::Hazardous,
    },
    Breakpoint {
        concentration_low: 350.5,
        concentration_high: 500.4,
        index_low: 401,
        index_high: 500,
        category: Category::Severe,
    },
];

// PM10 breakpoints, µg/m³ (CF=1).
const PM10_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint {
        concentration_low: 0.0,
        concentration_high: 54.0,
        index_low: 0,
        index_high: 50,
        category: Category::Good,
    },
    Breakpoint {
        concentration_low: 55.0,
        concentration_high: 154.0,
        index_low: 51,
        index_high: 100,
        category: Category::Moderate,
    },
    Breakpoint {
        concentration_low: 155.0,
        concentration_high: 254.0,
        index_low: 101,
        index_high: 150,
        category: Category::UnhealthyForSensitiveGroups,
    },
    Breakpoint {
        concentration_low: 255.0,
        concentration_high: 354.0,
        index_low: 151,
        index_high: 200,
        category: Category::Unhealthy,
    },
    Breakpoint {
        concentration_low: 355.0,
        concentration_high: 424.0,
        index_low: 201,
        index_high: 300,
        category: Category::VeryUnhealthy,
    },
    Breakpoint {
        concentration_low: 425.0,
        concentration_high: 504.0,
        index_low: 301,
        index_high: 400,
        category: Category::Hazardous,
    },
    Breakpoint {
        concentration_low: 505.0,
        concentration_high: 604.0,
        index_low: 401,
        index_high: 500,
        category: Category::Severe,
    },
];

/// Built-in PM2.5 table.
pub static PM2_5_TABLE: BreakpointTable<'static> = BreakpointTable {
    entries: &PM2_5_BREAKPOINTS,
};

/// Built-in PM10 table.
pub static PM10_TABLE: BreakpointTable<'static> = BreakpointTable {
    entries: &PM10_BREAKPOINTS,
};

impl<'a> PartialEq for BreakpointTable<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_well_formed() {
        assert_eq!(PM2_5_TABLE.validate(), Ok(()));
        assert_eq!(PM10_TABLE.validate(), Ok(()));
        assert_eq!(PM2_5_TABLE.entries().len(), 7);
        assert_eq!(PM10_TABLE.entries().len(), 7);
        assert_eq!(PM2_5_TABLE.ceiling(), 500.4);
        assert_eq!(PM10_TABLE.ceiling(), 604.0);
    }

    #[test]
    fn pollutant_selects_its_own_table() {
        assert_eq!(Pollutant::Pm2_5.table(), &PM2_5_TABLE);
        assert_eq!(Pollutant::Pm10.table(), &PM10_TABLE);
    }

    #[test]
    fn categories_order_by_severity() {
        assert!(Category::Good < Category::Moderate);
        assert!(Category::Hazardous < Category::Severe);
    }

    #[test]
    fn category_colors_follow_epa_scale() {
        assert_eq!(Category::Good.color(), Color::Green);
        assert_eq!(Category::Moderate.color(), Color::Yellow);
        assert_eq!(Category::UnhealthyForSensitiveGroups.color(), Color::Orange);
        assert_eq!(Category::Unhealthy.color(), Color::Red);
        assert_eq!(Category::VeryUnhealthy.color(), Color::Purple);
        assert_eq!(Category::Hazardous.color(), Color::DarkPurple);
        assert_eq!(Category::Severe.color(), Color::DarkPurple);
    }

    fn bp(clow: f32, chigh: f32, ilow: u16, ihigh: u16) -> Breakpoint {
        Breakpoint {
            concentration_low: clow,
            concentration_high: chigh,
            index_low: ilow,
            index_high: ihigh,
            category: Category::Good,
        }
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(BreakpointTable::new(&[]), Err(TableError::Empty));
    }

    #[test]
    fn rejects_inverted_concentration_bounds() {
        let entries = [bp(12.0, 0.0, 0, 50)];
        assert_eq!(
            BreakpointTable::new(&entries),
            Err(TableError::InvertedBounds { entry: 0 })
        );
    }

    #[test]
    fn rejects_inverted_index_bounds() {
        let entries = [bp(0.0, 12.0, 50, 0)];
        assert_eq!(
            BreakpointTable::new(&entries),
            Err(TableError::InvertedBounds { entry: 0 })
        );
    }

    #[test]
    fn rejects_nan_bounds() {
        let entries = [bp(0.0, f32::NAN, 0, 50)];
        assert_eq!(
            BreakpointTable::new(&entries),
            Err(TableError::InvertedBounds { entry: 0 })
        );
    }

    #[test]
    fn rejects_overlapping_ranges() {
        let entries = [bp(0.0, 12.0, 0, 50), bp(11.0, 35.4, 51, 100)];
        assert_eq!(
            BreakpointTable::new(&entries),
            Err(TableError::Overlap { entry: 1 })
        );
    }

    #[test]
    fn rejects_table_not_starting_at_zero() {
        let entries = [bp(5.0, 12.0, 0, 50)];
        assert_eq!(
            BreakpointTable::new(&entries),
            Err(TableError::Gap { entry: 0 })
        );
    }

    #[test]
    fn rejects_hole_between_ranges() {
        let entries = [bp(0.0, 12.0, 0, 50), bp(20.0, 35.4, 51, 100)];
        assert_eq!(
            BreakpointTable::new(&entries),
            Err(TableError::Gap { entry: 1 })
        );
    }

    #[test]
    fn rejects_discontinuous_index_ranges() {
        let entries = [bp(0.0, 12.0, 0, 50), bp(12.1, 35.4, 60, 100)];
        assert_eq!(
            BreakpointTable::new(&entries),
            Err(TableError::Gap { entry: 1 })
        );
    }

    #[test]
    fn accepts_well_formed_custom_table() {
        let entries = [bp(0.0, 12.0, 0, 50), bp(12.1, 35.4, 51, 100)];
        assert!(BreakpointTable::new(&entries).is_ok());
    }
}
