use std::collections::{hash_map::Entry, HashMap};
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use itertools::Itertools;

use crate::objects::*;
use crate::{Error, Row};

/// The way identifiers are compared: rendered to a string then trimmed
///
/// `"12"`, `" 12 "` and `12` are the same identifier, `"012"` is another one.
pub fn normalize_id<K: fmt::Display>(id: K) -> String {
    id.to_string().trim().to_owned()
}

fn same_id(record_id: Option<&str>, key: &str) -> bool {
    record_id.map_or(false, |id| id.trim() == key)
}

/// Two records sharing the same key
#[derive(Debug, Clone, PartialEq)]
pub struct Duplicate<K> {
    /// The shared key
    pub key: K,
    /// Position of the first record holding the key
    pub first: usize,
    /// Position of the record repeating the key
    pub duplicate: usize,
}

/// An ordered, append-only list of records of one type
///
/// Nothing is checked when adding a record: identifiers can be repeated
/// and references can be dangling. Records are always iterated in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection { items: Vec::new() }
    }
}

impl<T> Collection<T> {
    /// An empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the record at the end of the collection
    pub fn add(&mut self, record: T) {
        self.items.push(record);
    }

    /// The record at this position
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the records, in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Every pair of records with the same key, skipping records without key
    ///
    /// Each repetition is reported against the first record holding the key.
    pub fn duplicates_by<K, F>(&self, key: F) -> Vec<Duplicate<K>>
    where
        K: Eq + Hash + Clone,
        F: Fn(&T) -> Option<K>,
    {
        let mut seen = HashMap::new();
        let mut duplicates = Vec::new();
        for (position, item) in self.items.iter().enumerate() {
            if let Some(k) = key(item) {
                match seen.entry(k) {
                    Entry::Occupied(e) => duplicates.push(Duplicate {
                        key: e.key().clone(),
                        first: *e.get(),
                        duplicate: position,
                    }),
                    Entry::Vacant(e) => {
                        e.insert(position);
                    }
                }
            }
        }
        duplicates
    }
}

impl<T: Record> Collection<T> {
    /// Builds the records from the rows, in order. Never fails: invalid text is kept in the records
    pub fn from_rows<'a, I: IntoIterator<Item = &'a Row>>(rows: I) -> Self {
        rows.into_iter().map(T::from_row).collect()
    }

    /// The exported rows of every record, in insertion order
    pub fn export_all(&self) -> Vec<Row> {
        self.items.iter().map(T::export).collect()
    }

    /// Writes the records as csv, with the canonical header
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        crate::csv_rows::write_rows(writer, T::columns(), &self.export_all())
    }
}

impl<T: Id> Collection<T> {
    /// Is there at least one record with this identifier
    ///
    /// Never fails: an unknown identifier is just `false`.
    /// ```
    /// use gtfs_records::{Collection, ShapePoint};
    /// let mut shapes = Collection::new();
    /// shapes.add(ShapePoint { id: Some("12".into()), ..ShapePoint::default() });
    /// assert!(shapes.exists_by_id("12"));
    /// assert!(shapes.exists_by_id(12));
    /// assert!(!shapes.exists_by_id("B_shape"));
    /// ```
    pub fn exists_by_id<K: fmt::Display>(&self, id: K) -> bool {
        self.get_by_id(id).is_some()
    }

    /// The first record with this identifier
    pub fn get_by_id<K: fmt::Display>(&self, id: K) -> Option<&T> {
        let key = normalize_id(id);
        self.items.iter().find(|item| same_id(item.id(), &key))
    }

    /// Every record with this identifier, in insertion order
    pub fn all_by_id<K: fmt::Display>(&self, id: K) -> impl Iterator<Item = &T> {
        let key = normalize_id(id);
        self.items
            .iter()
            .filter(move |item| same_id(item.id(), &key))
    }

    /// Records sharing their identifier with a previous one
    pub fn duplicates(&self) -> Vec<Duplicate<String>> {
        self.duplicates_by(|item| item.id().map(normalize_id))
    }
}

impl Collection<Stop> {
    /// Stops with a [LocationType::StopArea] location type
    pub fn stations(&self) -> impl Iterator<Item = &Stop> {
        self.iter()
            .filter(|s| s.location_type.valid() == Some(LocationType::StopArea))
    }

    /// Stops whose parent station is the given one
    pub fn children_of<K: fmt::Display>(&self, station_id: K) -> impl Iterator<Item = &Stop> {
        let key = normalize_id(station_id);
        self.iter()
            .filter(move |s| same_id(s.parent_station.as_deref(), &key))
    }
}

impl Collection<Route> {
    pub fn by_agency<K: fmt::Display>(&self, agency_id: K) -> impl Iterator<Item = &Route> {
        let key = normalize_id(agency_id);
        self.iter()
            .filter(move |r| same_id(r.agency_id.as_deref(), &key))
    }
}

impl Collection<Trip> {
    pub fn by_route<K: fmt::Display>(&self, route_id: K) -> impl Iterator<Item = &Trip> {
        let key = normalize_id(route_id);
        self.iter()
            .filter(move |t| same_id(t.route_id.as_deref(), &key))
    }

    pub fn by_service<K: fmt::Display>(&self, service_id: K) -> impl Iterator<Item = &Trip> {
        let key = normalize_id(service_id);
        self.iter()
            .filter(move |t| same_id(t.service_id.as_deref(), &key))
    }
}

impl Collection<StopTime> {
    /// Stop times of the trip, in insertion order
    pub fn for_trip<K: fmt::Display>(&self, trip_id: K) -> impl Iterator<Item = &StopTime> {
        self.all_by_id(trip_id)
    }
}

impl Collection<CalendarDate> {
    pub fn for_service<K: fmt::Display>(
        &self,
        service_id: K,
    ) -> impl Iterator<Item = &CalendarDate> {
        self.all_by_id(service_id)
    }

    /// Is there an exception for the service on that `YYYYMMDD` date
    pub fn exists_by_service_and_date<K: fmt::Display>(&self, service_id: K, date: &str) -> bool {
        let date = date.trim();
        self.for_service(service_id)
            .any(|cd| cd.date.as_deref().map(str::trim) == Some(date))
    }
}

impl Collection<ShapePoint> {
    /// Distinct shape identifiers, trimmed, in order of first appearance
    pub fn shape_ids(&self) -> Vec<&str> {
        self.iter()
            .filter_map(|p| p.id.as_deref())
            .map(str::trim)
            .unique()
            .collect()
    }

    /// Points of the shape, in insertion order
    pub fn points_of<K: fmt::Display>(&self, shape_id: K) -> impl Iterator<Item = &ShapePoint> {
        self.all_by_id(shape_id)
    }

    /// Points of the shape ordered by `shape_pt_sequence`, points without a valid sequence last
    ///
    /// The sort is stable: points with the same sequence keep their insertion order.
    pub fn sorted_points_of<K: fmt::Display>(&self, shape_id: K) -> Vec<&ShapePoint> {
        self.points_of(shape_id)
            .sorted_by_key(|p| {
                let sequence = p.sequence.valid();
                (sequence.is_none(), sequence)
            })
            .collect()
    }
}

impl Collection<Frequency> {
    pub fn for_trip<K: fmt::Display>(&self, trip_id: K) -> impl Iterator<Item = &Frequency> {
        self.all_by_id(trip_id)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Collection {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter)
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

pub type Agencies = Collection<Agency>;
pub type Stops = Collection<Stop>;
pub type Routes = Collection<Route>;
pub type Trips = Collection<Trip>;
pub type StopTimes = Collection<StopTime>;
pub type Calendars = Collection<Calendar>;
pub type CalendarDates = Collection<CalendarDate>;
pub type FareAttributes = Collection<FareAttribute>;
pub type FareRules = Collection<FareRule>;
pub type Shapes = Collection<ShapePoint>;
pub type Frequencies = Collection<Frequency>;
pub type StopTransfers = Collection<Transfer>;
pub type FeedInfos = Collection<FeedInfo>;
pub type Levels = Collection<Level>;
