use serde::{ser::SerializeMap, Serialize, Serializer};

/// Payload handed straight to the charting library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData<T> {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset<T>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset<T> {
    pub label: String,
    pub data: Vec<T>,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
}

impl<T> Dataset<T> {
    pub fn new(label: &str, data: Vec<T>, background_color: &str) -> Self {
        Self {
            label: label.to_string(),
            data,
            background_color: background_color.to_string(),
        }
    }
}

/// Label -> row mapping that keeps insertion order when serialized as an object.
#[derive(Debug, Clone, PartialEq)]
pub struct TableData<R> {
    rows: Vec<(String, R)>,
}

impl<R> TableData<R> {
    pub fn new(rows: Vec<(String, R)>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[(String, R)] {
        &self.rows
    }

    pub fn get(&self, label: &str) -> Option<&R> {
        self.rows.iter().find(|(l, _)| l == label).map(|(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R: Serialize> Serialize for TableData<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (label, row) in &self.rows {
            map.serialize_entry(label, row)?;
        }
        map.end()
    }
}
