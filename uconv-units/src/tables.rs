//! Reference points for the size categories
//!
//! Every column of a table lists the same physical sizes in the same order,
//! so `column[i]` and `base_values[i]` always describe one real size.
//! The EU and China columns of the women's table repeat values; those flat
//! runs mirror published size charts and are kept as-is.

/// One unit system's reference points
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Column {
    /// Numeric sizes, ascending
    Numeric(&'static [f64]),
    /// Letter sizes (UK rings); a size is exchanged as its offset from 'A'
    Letters(&'static [u8]),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(points) => points.len(),
            Column::Letters(letters) => letters.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A unit that converts to the table's base unit by a fixed factor
/// instead of through the table (`base = value * factor`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedUnit {
    pub id: &'static str,
    pub factor: f64,
}

/// A size chart: a base column plus per-unit reference columns
#[derive(Debug, PartialEq)]
pub struct SizeTable {
    /// Category id this table serves
    pub category: &'static str,
    /// Unit id of the base quantity
    pub base: &'static str,
    base_values: &'static [f64],
    columns: &'static [(&'static str, Column)],
    derived: &'static [DerivedUnit],
}

impl SizeTable {
    /// Reference points of the base unit, strictly ascending
    pub fn base_values(&self) -> &'static [f64] {
        self.base_values
    }

    /// Reference column for a unit id
    pub fn column(&self, unit_id: &str) -> Option<Column> {
        self.columns
            .iter()
            .find(|(id, _)| *id == unit_id)
            .map(|(_, column)| *column)
    }

    /// Directly derived unit for a unit id
    pub fn derived(&self, unit_id: &str) -> Option<&DerivedUnit> {
        self.derived.iter().find(|d| d.id == unit_id)
    }

    /// Whether the table can convert `unit_id` at all
    pub fn knows(&self, unit_id: &str) -> bool {
        unit_id == self.base || self.column(unit_id).is_some() || self.derived(unit_id).is_some()
    }

    /// Every unit id the table serves: base, columns, then derived units
    pub fn unit_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.base)
            .chain(self.columns.iter().map(|(id, _)| *id))
            .chain(self.derived.iter().map(|d| d.id))
    }

    /// Column ids with their reference points
    pub fn columns(&self) -> &'static [(&'static str, Column)] {
        self.columns
    }
}

/// Inner ring diameter in millimetres
pub static RING_SIZE: SizeTable = SizeTable {
    category: "ring-size",
    base: "diameter_mm",
    base_values: &[
        14.0, 14.4, 14.8, 15.3, 15.7, 16.1, 16.5, 16.9, 17.3, 17.7, 18.2,
        18.6, 19.0, 19.4, 19.8, 20.2, 20.6, 21.0, 21.4, 21.8, 22.2,
    ],
    columns: &[
        ("us", Column::Numeric(&[
            3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 6.0, 6.5, 7.0, 7.5, 8.0,
            8.5, 9.0, 9.5, 10.0, 10.5, 11.0, 11.5, 12.0, 12.5, 13.0,
        ])),
        ("uk", Column::Letters(b"FGHIJKLMNOPQRSTUVWXYZ")),
        ("eu", Column::Numeric(&[
            44.0, 45.0, 47.0, 48.0, 49.0, 51.0, 52.0, 53.0, 54.0, 56.0, 57.0,
            58.0, 60.0, 61.0, 62.0, 63.0, 65.0, 66.0, 67.0, 69.0, 70.0,
        ])),
        ("japan", Column::Numeric(&[
            4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0,
            15.0, 16.0, 17.0, 18.0, 19.0, 20.0, 21.0, 22.0, 23.0, 24.0,
        ])),
    ],
    derived: &[],
};

/// Men's foot length in centimetres, US men's 4.5 to 14
pub static MENS_SHOE_SIZE: SizeTable = SizeTable {
    category: "mens-shoe-size",
    base: "cm",
    base_values: &[
        22.5, 23.0, 23.5, 24.0, 24.5, 25.0, 25.5, 26.0, 26.5, 27.0,
        27.5, 28.0, 28.5, 29.0, 29.5, 30.0, 30.5, 31.0, 31.5, 32.0,
    ],
    columns: &[
        ("us_mens", Column::Numeric(&[
            4.5, 5.0, 5.5, 6.0, 6.5, 7.0, 7.5, 8.0, 8.5, 9.0,
            9.5, 10.0, 10.5, 11.0, 11.5, 12.0, 12.5, 13.0, 13.5, 14.0,
        ])),
        ("uk", Column::Numeric(&[
            3.5, 4.0, 4.5, 5.0, 5.5, 6.0, 6.5, 7.0, 7.5, 8.0,
            8.5, 9.0, 9.5, 10.0, 10.5, 11.0, 11.5, 12.0, 12.5, 13.0,
        ])),
        ("eu", Column::Numeric(&[
            36.5, 37.0, 37.5, 38.0, 38.5, 39.0, 39.5, 40.0, 40.5, 41.0,
            41.5, 42.0, 42.5, 43.0, 43.5, 44.0, 44.5, 45.0, 45.5, 46.0,
        ])),
        ("china", Column::Numeric(&[
            36.0, 36.5, 37.0, 37.5, 38.0, 38.5, 39.0, 39.5, 40.0, 40.5,
            41.0, 41.5, 42.0, 42.5, 43.0, 43.5, 44.0, 44.5, 45.0, 45.5,
        ])),
    ],
    derived: &[DerivedUnit { id: "inches", factor: CM_PER_INCH }],
};

/// Women's foot length in centimetres, US women's 4.5 to 14
pub static WOMENS_SHOE_SIZE: SizeTable = SizeTable {
    category: "womens-shoe-size",
    base: "cm",
    base_values: &[
        21.5, 22.0, 22.5, 23.0, 23.5, 24.0, 24.5, 25.0, 25.5, 26.0,
        26.5, 27.0, 27.5, 28.0, 28.5, 29.0, 29.5, 30.0, 30.5, 31.0,
    ],
    columns: &[
        ("us_womens", Column::Numeric(&[
            4.5, 5.0, 5.5, 6.0, 6.5, 7.0, 7.5, 8.0, 8.5, 9.0,
            9.5, 10.0, 10.5, 11.0, 11.5, 12.0, 12.5, 13.0, 13.5, 14.0,
        ])),
        ("uk", Column::Numeric(&[
            2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 6.0, 6.5,
            7.0, 7.5, 8.0, 8.5, 9.0, 9.5, 10.0, 10.5, 11.0, 11.5,
        ])),
        ("eu", Column::Numeric(&[
            35.0, 35.0, 36.0, 37.0, 37.0, 38.0, 38.0, 39.0, 40.0, 40.0,
            41.0, 42.0, 42.0, 43.0, 43.0, 44.0, 44.0, 45.0, 45.0, 46.0,
        ])),
        ("china", Column::Numeric(&[
            34.0, 34.0, 35.0, 36.0, 36.0, 37.0, 37.0, 38.0, 39.0, 39.0,
            40.0, 40.0, 40.0, 41.0, 41.0, 42.0, 42.0, 43.0, 43.0, 44.0,
        ])),
    ],
    derived: &[DerivedUnit { id: "inches", factor: CM_PER_INCH }],
};

const CM_PER_INCH: f64 = 2.54;

/// Table serving a category id, if it is a size category
pub fn table_for(category: &str) -> Option<&'static SizeTable> {
    [&RING_SIZE, &MENS_SHOE_SIZE, &WOMENS_SHOE_SIZE]
        .into_iter()
        .find(|t| t.category == category)
}
