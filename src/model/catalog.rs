use super::Activity;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Activities keyed by name, in insertion order.
///
/// Serializes as a JSON object whose key order follows the catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    activities: Vec<(String, Activity)>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            activities: Vec::new(),
        }
    }

    /// Inserts an activity, replacing any existing one with the same name
    /// in place.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.activities.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = activity,
            None => self.activities.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.activities
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }
}

impl IntoIterator for Catalog {
    type Item = (String, Activity);
    type IntoIter = std::vec::IntoIter<(String, Activity)>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.into_iter()
    }
}

/// Later entries replace earlier ones with the same name, keeping the
/// position of the first.
impl FromIterator<(String, Activity)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut activities: Vec<(String, Activity)> = Vec::new();
        for (name, activity) in iter {
            match positions.get(&name) {
                Some(&i) => activities[i].1 = activity,
                None => {
                    positions.insert(name.clone(), activities.len());
                    activities.push((name, activity));
                }
            }
        }
        Catalog { activities }
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for (name, activity) in &self.activities {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of activity name to activity")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry::<String, Activity>()? {
            entries.push(entry);
        }
        Ok(entries.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}
