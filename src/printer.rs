//! # Printer Profiles
//!
//! This module defines the hardware character and dot budgets the compiler
//! validates against.
//!
//! ## Built-in Profiles
//!
//! | Profile | Paper | Columns | Columns (double-width) | Raster width |
//! |---------|-------|---------|------------------------|--------------|
//! | MM80    | 80mm  | 42      | 21                     | 384 dots     |
//! | MM58    | 58mm  | 32      | 16                     | 384 dots     |
//!
//! ## Usage
//!
//! ```
//! use tirilla::printer::PrinterProfile;
//!
//! let profile = PrinterProfile::MM80;
//! assert_eq!(profile.columns, 42);
//! assert_eq!(profile.columns_double, 21);
//! ```

use crate::error::TirillaError;

/// # Printer Profile
///
/// Defines the output characteristics a template is compiled against.
///
/// ## Character Budget
///
/// - **columns**: printable characters per line at normal width
/// - **columns_double**: printable characters per line with double-width
///   active (half the normal budget; double-width glyphs occupy two cells)
///
/// ## Raster Geometry
///
/// - **dot_width**: raster image width in dots (must be a multiple of 8;
///   the bitmap packs 8 dots per byte, MSB first)
/// - **logo_height**: height in dots of the generated logo
///
/// ## Item Block Layout
///
/// - **name_width**: left-justified name field width in the item block
/// - **price_width**: right-justified price field width in the item block
///
/// The two column fields together must fit the normal line budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterProfile {
    /// Profile name
    pub name: &'static str,

    /// Printable characters per line at normal width
    pub columns: usize,

    /// Printable characters per line with double-width active
    pub columns_double: usize,

    /// Raster image width in dots
    pub dot_width: u16,

    /// Generated logo height in dots
    pub logo_height: u16,

    /// Item block: name field width
    pub name_width: usize,

    /// Item block: price field width
    pub price_width: usize,
}

impl PrinterProfile {
    /// # 80mm Paper Profile
    ///
    /// The default profile: a standard 80mm thermal roll with a 42-column
    /// character budget (21 under double-width).
    pub const MM80: Self = Self {
        name: "80mm",
        columns: 42,
        columns_double: 21,
        dot_width: 384,
        logo_height: 128,
        name_width: 24,
        price_width: 8,
    };

    /// # 58mm Paper Profile
    ///
    /// Narrow-roll profile with a 32-column budget. The item block columns
    /// shrink to fit.
    pub const MM58: Self = Self {
        name: "58mm",
        columns: 32,
        columns_double: 16,
        dot_width: 384,
        logo_height: 128,
        name_width: 20,
        price_width: 8,
    };

    /// Raster width in bytes (8 dots per byte).
    #[inline]
    pub const fn width_bytes(&self) -> u16 {
        self.dot_width / 8
    }

    /// Validate the profile before a synthesis pass.
    ///
    /// A zero column budget or a dot width that is not byte-aligned would
    /// corrupt the instruction stream, so the pass aborts on these.
    pub fn validate(&self) -> Result<(), TirillaError> {
        if self.columns == 0 || self.columns_double == 0 {
            return Err(TirillaError::Profile(format!(
                "{}: column budget must be non-zero",
                self.name
            )));
        }
        if self.dot_width == 0 || self.dot_width % 8 != 0 {
            return Err(TirillaError::Profile(format!(
                "{}: dot width {} is not a multiple of 8",
                self.name, self.dot_width
            )));
        }
        if self.name_width + self.price_width > self.columns {
            return Err(TirillaError::Profile(format!(
                "{}: item columns ({} + {}) exceed the line budget ({})",
                self.name, self.name_width, self.price_width, self.columns
            )));
        }
        Ok(())
    }

    /// Look up a built-in profile by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "mm80" | "80mm" => Some(Self::MM80),
            "mm58" | "58mm" => Some(Self::MM58),
            _ => None,
        }
    }
}

impl Default for PrinterProfile {
    fn default() -> Self {
        Self::MM80
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm80_budgets() {
        let profile = PrinterProfile::MM80;
        assert_eq!(profile.columns, 42);
        assert_eq!(profile.columns_double, 21);
        assert_eq!(profile.columns, profile.columns_double * 2);
    }

    #[test]
    fn test_mm80_raster_geometry() {
        let profile = PrinterProfile::MM80;
        assert_eq!(profile.dot_width, 384);
        assert_eq!(profile.width_bytes(), 48);
        assert_eq!(profile.logo_height, 128);
    }

    #[test]
    fn test_item_columns_fit_line_budget() {
        for profile in [PrinterProfile::MM80, PrinterProfile::MM58] {
            assert!(
                profile.name_width + profile.price_width <= profile.columns,
                "{}: item columns overflow the line budget",
                profile.name
            );
        }
    }

    #[test]
    fn test_builtins_validate() {
        assert!(PrinterProfile::MM80.validate().is_ok());
        assert!(PrinterProfile::MM58.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_columns() {
        let profile = PrinterProfile {
            columns_double: 0,
            ..PrinterProfile::MM80
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unaligned_width() {
        let profile = PrinterProfile {
            dot_width: 100,
            ..PrinterProfile::MM80
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_by_name() {
        assert_eq!(PrinterProfile::by_name("mm80"), Some(PrinterProfile::MM80));
        assert_eq!(PrinterProfile::by_name("58mm"), Some(PrinterProfile::MM58));
        assert!(PrinterProfile::by_name("a4").is_none());
    }

    #[test]
    fn test_default_is_mm80() {
        assert_eq!(PrinterProfile::default(), PrinterProfile::MM80);
    }
}
