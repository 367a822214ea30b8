use std::cmp::Ordering;
use std::fmt;

/// A single node or edge attribute value.
///
/// Values of different types are totally ordered by type rank first
/// (`Absent < Bool < number < Text < Tuple`) and by their natural order
/// within a type. `Int` and `Float` share the numeric rank and compare by
/// value; when an int and a float are numerically equal the int sorts first,
/// so `Int(1)` and `Float(1.0)` stay distinct values.
#[derive(Debug, Clone)]
pub enum AttrValue {
    /// The element does not carry the attribute at all.
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Tuple(Vec<AttrValue>),
}

impl AttrValue {
    /// Parse a raw table cell. Empty cells are `Absent`.
    pub fn parse_cell(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.is_empty() {
            return AttrValue::Absent;
        }
        match cell {
            "true" | "True" => return AttrValue::Bool(true),
            "false" | "False" => return AttrValue::Bool(false),
            _ => {}
        }
        if let Ok(i) = cell.parse::<i64>() {
            return AttrValue::Int(i);
        }
        if let Ok(x) = cell.parse::<f64>() {
            return AttrValue::Float(x);
        }
        AttrValue::Text(cell.to_string())
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, AttrValue::Int(_) | AttrValue::Float(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, AttrValue::Absent)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Int(i) => Some(*i as f64),
            AttrValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            AttrValue::Absent => 0,
            AttrValue::Bool(_) => 1,
            AttrValue::Int(_) | AttrValue::Float(_) => 2,
            AttrValue::Text(_) => 3,
            AttrValue::Tuple(_) => 4,
        }
    }
}

impl Ord for AttrValue {
    fn cmp(&self, other: &Self) -> Ordering {
        use AttrValue::*;
        match (self, other) {
            (Absent, Absent) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b).then(Ordering::Less),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)).then(Ordering::Greater),
            (Text(a), Text(b)) => a.cmp(b),
            (Tuple(a), Tuple(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for AttrValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AttrValue {}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Absent => write!(f, "<absent>"),
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Int(i) => write!(f, "{}", i),
            AttrValue::Float(x) => write!(f, "{}", x),
            AttrValue::Text(s) => write!(f, "{}", s),
            AttrValue::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::Int(i64::from(i))
    }
}

impl From<u32> for AttrValue {
    fn from(i: u32) -> Self {
        AttrValue::Int(i64::from(i))
    }
}

impl From<f64> for AttrValue {
    fn from(x: f64) -> Self {
        AttrValue::Float(x)
    }
}

impl From<f32> for AttrValue {
    fn from(x: f32) -> Self {
        AttrValue::Float(f64::from(x))
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(AttrValue::Absent, Into::into)
    }
}

impl<A: Into<AttrValue>, B: Into<AttrValue>> From<(A, B)> for AttrValue {
    fn from((a, b): (A, B)) -> Self {
        AttrValue::Tuple(vec![a.into(), b.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert_eq!(AttrValue::parse_cell(""), AttrValue::Absent);
        assert_eq!(AttrValue::parse_cell(" 42 "), AttrValue::Int(42));
        assert_eq!(AttrValue::parse_cell("2.5"), AttrValue::Float(2.5));
        assert_eq!(AttrValue::parse_cell("true"), AttrValue::Bool(true));
        assert_eq!(AttrValue::parse_cell("chr1"), AttrValue::Text("chr1".into()));
    }

    #[test]
    fn test_numbers_sort_numerically() {
        let mut values: Vec<AttrValue> = vec![10.into(), 2.5.into(), 3.into(), (-1).into()];
        values.sort();
        assert_eq!(
            values,
            vec![AttrValue::Int(-1), AttrValue::Float(2.5), AttrValue::Int(3), AttrValue::Int(10)]
        );
    }

    #[test]
    fn test_mixed_types_sort_by_rank() {
        let mut values: Vec<AttrValue> = vec![
            "b".into(),
            AttrValue::Absent,
            7.into(),
            true.into(),
            (1, 2).into(),
        ];
        values.sort();
        assert!(values[0].is_absent());
        assert_eq!(values[1], AttrValue::Bool(true));
        assert_eq!(values[2], AttrValue::Int(7));
        assert_eq!(values[3], AttrValue::Text("b".into()));
        assert!(matches!(values[4], AttrValue::Tuple(_)));
    }

    #[test]
    fn test_int_and_float_stay_distinct() {
        let i = AttrValue::Int(1);
        let x = AttrValue::Float(1.0);
        assert_ne!(i, x);
        assert!(i < x);
    }

    #[test]
    fn test_nan_is_orderable() {
        let nan = AttrValue::Float(f64::NAN);
        assert_eq!(nan, nan.clone());
        assert!(AttrValue::Float(1.0) < nan);
    }
}
