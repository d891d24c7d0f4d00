use crate::collection::{normalize_id, Collection, Duplicate};
use crate::objects::*;
use crate::value::Text;
use crate::parsing::{parse_color, parse_date, parse_time};
use crate::Feed;
use log::info;
use rgb::RGB8;
use std::fmt;
use thiserror::Error;

/// A data-quality problem found by [Feed::validate]
///
/// `row` is the position of the record in its collection, starting at 0.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Problem {
    /// A required (or conditionally required) field is unset or blank
    #[error("{object_type} at row {row}: missing required field '{field}'")]
    MissingRequiredField {
        object_type: ObjectType,
        row: usize,
        field: &'static str,
    },
    /// The value is set but outside of what the field accepts, or is text that cannot be read as its type
    #[error("{object_type} at row {row}: invalid value '{value}' for field '{field}'")]
    InvalidValue {
        object_type: ObjectType,
        row: usize,
        field: &'static str,
        value: String,
    },
    /// Two records share an identifier (or a composite key)
    #[error("{object_type} '{id}' at row {duplicate_row} is already defined at row {first_row}")]
    DuplicateIdentifier {
        object_type: ObjectType,
        id: String,
        first_row: usize,
        duplicate_row: usize,
    },
    /// The referenced identifier does not exist
    #[error("{object_type} at row {row}: '{id}' of field '{field}' is not a known {target}")]
    DanglingReference {
        object_type: ObjectType,
        row: usize,
        field: &'static str,
        id: String,
        target: ObjectType,
    },
    /// The parent station exists but has the wrong location type
    ///
    /// A boarding area ([LocationType::BoardingArea], type 4) expects a platform
    /// ([LocationType::StopPoint], type 0) as parent. Every other location expects
    /// a station ([LocationType::StopArea], type 1). `found` is the location type of the parent.
    #[error("Stop at row {row}: parent station '{parent_station}' has location type {found}")]
    InvalidParentStation {
        row: usize,
        parent_station: String,
        found: i32,
    },
}

/// Every problem of a feed, in the order they were found
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub problems: Vec<Problem>,
}

impl ValidationReport {
    /// No problem was found
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Problem> {
        self.problems.iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "feed valid");
        }
        write!(f, "feed invalid, here are {} problems:", self.len())?;
        for problem in &self.problems {
            write!(f, "\n  {}", problem)?;
        }
        Ok(())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// The checks of one record
struct RecordCheck<'a> {
    object_type: ObjectType,
    row: usize,
    problems: &'a mut Vec<Problem>,
}

impl RecordCheck<'_> {
    fn missing(&mut self, field: &'static str) {
        self.problems.push(Problem::MissingRequiredField {
            object_type: self.object_type,
            row: self.row,
            field,
        });
    }

    fn invalid<V: ToString>(&mut self, field: &'static str, value: V) {
        self.problems.push(Problem::InvalidValue {
            object_type: self.object_type,
            row: self.row,
            field,
            value: value.to_string(),
        });
    }

    fn dangling(&mut self, field: &'static str, id: &str, target: ObjectType) {
        self.problems.push(Problem::DanglingReference {
            object_type: self.object_type,
            row: self.row,
            field,
            id: normalize_id(id),
            target,
        });
    }

    fn required_text(&mut self, field: &'static str, value: &Option<String>) {
        if is_blank(value) {
            self.missing(field);
        }
    }

    fn required<V>(&mut self, field: &'static str, value: &Option<V>) {
        if value.is_none() {
            self.missing(field);
        }
    }

    /// Text that could not be read as the type of the field
    fn typed<T>(&mut self, field: &'static str, value: &Option<Value<T>>) {
        if let Some(text) = value.as_ref().and_then(Value::invalid) {
            self.invalid(field, text);
        }
    }

    fn code<C: Code>(&mut self, field: &'static str, value: &Option<Value<C>>) {
        match value {
            Some(Value::Valid(c)) if !c.is_known() => self.invalid(field, c.code()),
            _ => self.typed(field, value),
        }
    }

    fn color(&mut self, field: &'static str, value: &Option<String>) {
        if let Some(v) = value {
            if parse_color(v, || RGB8::new(0, 0, 0)).is_err() {
                self.invalid(field, v);
            }
        }
    }

    fn date(&mut self, field: &'static str, value: &Option<String>) {
        if let Some(v) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            if parse_date(v).is_err() {
                self.invalid(field, v);
            }
        }
    }

    fn time(&mut self, field: &'static str, value: &Option<String>) {
        if let Some(v) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            if parse_time(v).is_err() {
                self.invalid(field, v);
            }
        }
    }

    fn range(&mut self, field: &'static str, value: &Option<Value<f64>>, max: f64) {
        match value {
            Some(Value::Valid(v)) if !(-max..=max).contains(v) => self.invalid(field, v),
            _ => self.typed(field, value),
        }
    }

    /// A blank reference is not checked: it is either optional or reported as missing
    fn reference<R: Record + Id>(
        &mut self,
        field: &'static str,
        value: &Option<String>,
        target: &Collection<R>,
    ) {
        if let Some(id) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            if !target.exists_by_id(id) {
                self.dangling(field, id, R::OBJECT_TYPE);
            }
        }
    }
}

struct Validator {
    problems: Vec<Problem>,
}

impl Validator {
    fn record(&mut self, object_type: ObjectType, row: usize) -> RecordCheck<'_> {
        RecordCheck {
            object_type,
            row,
            problems: &mut self.problems,
        }
    }

    fn duplicates<K: fmt::Display>(
        &mut self,
        object_type: ObjectType,
        duplicates: Vec<Duplicate<K>>,
    ) {
        self.problems
            .extend(duplicates.into_iter().map(|d| Problem::DuplicateIdentifier {
                object_type,
                id: d.key.to_string(),
                first_row: d.first,
                duplicate_row: d.duplicate,
            }));
    }

    fn duplicated_ids<T: Record + Id>(&mut self, collection: &Collection<T>) {
        self.duplicates(T::OBJECT_TYPE, collection.duplicates());
    }

    fn duplicated_pairs<T, F>(&mut self, collection: &Collection<T>, key: F)
    where
        T: Record,
        F: Fn(&T) -> Option<(String, String)>,
    {
        let duplicates: Vec<Duplicate<String>> = collection
            .duplicates_by(key)
            .into_iter()
            .map(|d| Duplicate {
                key: format!("{}, {}", d.key.0, d.key.1),
                first: d.first,
                duplicate: d.duplicate,
            })
            .collect();
        self.duplicates(T::OBJECT_TYPE, duplicates);
    }
}

fn text_key(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(normalize_id)
        .filter(|v| !v.is_empty())
}

fn pair_key(first: &Option<String>, second: Option<String>) -> Option<(String, String)> {
    Some((text_key(first)?, second?))
}

fn value_key<T: Text>(value: &Option<Value<T>>) -> Option<String> {
    value.as_ref().map(Value::text)
}

impl Feed {
    /// Checks the whole feed and lists every problem found
    ///
    /// Never fails and never stops at the first problem.
    /// ```
    /// use gtfs_records::{Feed, Problem, Route};
    /// let mut feed = Feed::default();
    /// feed.routes.add(Route { id: Some("r1".into()), ..Route::default() });
    /// let report = feed.validate();
    /// assert!(!report.is_valid());
    /// assert!(report.problems.iter().any(|p| matches!(p, Problem::MissingRequiredField { field: "route_type", .. })));
    /// ```
    pub fn validate(&self) -> ValidationReport {
        let mut v = Validator {
            problems: Vec::new(),
        };
        let several_agencies = self.agencies.len() > 1;

        for (i, agency) in self.agencies.iter().enumerate() {
            let mut c = v.record(Agency::OBJECT_TYPE, i);
            if several_agencies {
                c.required_text("agency_id", &agency.id);
            }
            c.required_text("agency_name", &agency.name);
            c.required_text("agency_url", &agency.url);
            c.required_text("agency_timezone", &agency.timezone);
        }
        v.duplicated_ids(&self.agencies);

        for (i, stop) in self.stops.iter().enumerate() {
            let mut c = v.record(Stop::OBJECT_TYPE, i);
            c.required_text("stop_id", &stop.id);
            if stop.requires_name_and_position() {
                c.required_text("stop_name", &stop.name);
                c.required("stop_lat", &stop.latitude);
                c.required("stop_lon", &stop.longitude);
            }
            if stop.requires_parent_station() {
                c.required_text("parent_station", &stop.parent_station);
            }
            c.range("stop_lat", &stop.latitude, 90.0);
            c.range("stop_lon", &stop.longitude, 180.0);
            c.code("location_type", &stop.location_type);
            c.code("wheelchair_boarding", &stop.wheelchair_boarding);
            c.reference("level_id", &stop.level_id, &self.levels);
            c.reference("parent_station", &stop.parent_station, &self.stops);
            self.check_parent_station(i, stop, &mut v);
        }
        v.duplicated_ids(&self.stops);

        for (i, route) in self.routes.iter().enumerate() {
            let mut c = v.record(Route::OBJECT_TYPE, i);
            c.required_text("route_id", &route.id);
            if several_agencies {
                c.required_text("agency_id", &route.agency_id);
            }
            if !route.has_name() {
                c.missing("route_short_name");
            }
            c.required("route_type", &route.route_type);
            c.code("route_type", &route.route_type);
            c.color("route_color", &route.color);
            c.color("route_text_color", &route.text_color);
            c.reference("agency_id", &route.agency_id, &self.agencies);
        }
        v.duplicated_ids(&self.routes);

        for (i, trip) in self.trips.iter().enumerate() {
            let mut c = v.record(Trip::OBJECT_TYPE, i);
            c.required_text("route_id", &trip.route_id);
            c.required_text("service_id", &trip.service_id);
            c.required_text("trip_id", &trip.id);
            c.code("direction_id", &trip.direction_id);
            c.code("wheelchair_accessible", &trip.wheelchair_accessible);
            c.code("bikes_allowed", &trip.bikes_allowed);
            c.reference("route_id", &trip.route_id, &self.routes);
            c.reference("shape_id", &trip.shape_id, &self.shapes);
            if let Some(service_id) = trip
                .service_id
                .as_deref()
                .filter(|s| !s.trim().is_empty())
            {
                if !self.calendar.exists_by_id(service_id)
                    && !self.calendar_dates.exists_by_id(service_id)
                {
                    c.dangling("service_id", service_id, Calendar::OBJECT_TYPE);
                }
            }
        }
        v.duplicated_ids(&self.trips);

        for (i, stop_time) in self.stop_times.iter().enumerate() {
            let mut c = v.record(StopTime::OBJECT_TYPE, i);
            c.required_text("trip_id", &stop_time.trip_id);
            c.required_text("stop_id", &stop_time.stop_id);
            c.required("stop_sequence", &stop_time.stop_sequence);
            c.typed("stop_sequence", &stop_time.stop_sequence);
            c.typed("shape_dist_traveled", &stop_time.shape_dist_traveled);
            c.time("arrival_time", &stop_time.arrival_time);
            c.time("departure_time", &stop_time.departure_time);
            c.code("pickup_type", &stop_time.pickup_type);
            c.code("drop_off_type", &stop_time.drop_off_type);
            c.code("timepoint", &stop_time.timepoint);
            c.reference("trip_id", &stop_time.trip_id, &self.trips);
            c.reference("stop_id", &stop_time.stop_id, &self.stops);
        }
        v.duplicated_pairs(&self.stop_times, |st| {
            pair_key(&st.trip_id, value_key(&st.stop_sequence))
        });

        for (i, calendar) in self.calendar.iter().enumerate() {
            let mut c = v.record(Calendar::OBJECT_TYPE, i);
            c.required_text("service_id", &calendar.id);
            for &(field, day) in [
                ("monday", &calendar.monday),
                ("tuesday", &calendar.tuesday),
                ("wednesday", &calendar.wednesday),
                ("thursday", &calendar.thursday),
                ("friday", &calendar.friday),
                ("saturday", &calendar.saturday),
                ("sunday", &calendar.sunday),
            ]
            .iter()
            {
                c.required(field, day);
                c.code(field, day);
            }
            c.required_text("start_date", &calendar.start_date);
            c.required_text("end_date", &calendar.end_date);
            c.date("start_date", &calendar.start_date);
            c.date("end_date", &calendar.end_date);
        }
        v.duplicated_ids(&self.calendar);

        for (i, calendar_date) in self.calendar_dates.iter().enumerate() {
            let mut c = v.record(CalendarDate::OBJECT_TYPE, i);
            c.required_text("service_id", &calendar_date.service_id);
            c.required_text("date", &calendar_date.date);
            c.required("exception_type", &calendar_date.exception_type);
            c.date("date", &calendar_date.date);
            c.code("exception_type", &calendar_date.exception_type);
            // A feed may define its services only with calendar_dates.txt
            if !self.calendar.is_empty() {
                c.reference("service_id", &calendar_date.service_id, &self.calendar);
            }
        }
        v.duplicated_pairs(&self.calendar_dates, |cd| {
            pair_key(&cd.service_id, text_key(&cd.date))
        });

        for (i, fare) in self.fare_attributes.iter().enumerate() {
            let mut c = v.record(FareAttribute::OBJECT_TYPE, i);
            c.required_text("fare_id", &fare.id);
            c.required_text("price", &fare.price);
            c.required_text("currency_type", &fare.currency);
            c.required("payment_method", &fare.payment_method);
            if let Some(price) = fare.price.as_deref().filter(|p| !p.trim().is_empty()) {
                match price.trim().parse::<f64>() {
                    Ok(p) if p >= 0.0 => (),
                    _ => c.invalid("price", price),
                }
            }
            c.code("payment_method", &fare.payment_method);
            c.code("transfers", &fare.transfers);
            c.typed("transfer_duration", &fare.transfer_duration);
            c.reference("agency_id", &fare.agency_id, &self.agencies);
        }
        v.duplicated_ids(&self.fare_attributes);

        for (i, rule) in self.fare_rules.iter().enumerate() {
            let mut c = v.record(FareRule::OBJECT_TYPE, i);
            c.required_text("fare_id", &rule.fare_id);
            c.reference("fare_id", &rule.fare_id, &self.fare_attributes);
            c.reference("route_id", &rule.route_id, &self.routes);
        }

        for (i, point) in self.shapes.iter().enumerate() {
            let mut c = v.record(ShapePoint::OBJECT_TYPE, i);
            c.required_text("shape_id", &point.id);
            c.required("shape_pt_lat", &point.latitude);
            c.required("shape_pt_lon", &point.longitude);
            c.required("shape_pt_sequence", &point.sequence);
            c.range("shape_pt_lat", &point.latitude, 90.0);
            c.range("shape_pt_lon", &point.longitude, 180.0);
            c.typed("shape_pt_sequence", &point.sequence);
            c.typed("shape_dist_traveled", &point.dist_traveled);
        }
        v.duplicated_pairs(&self.shapes, |p| pair_key(&p.id, value_key(&p.sequence)));

        for (i, frequency) in self.frequencies.iter().enumerate() {
            let mut c = v.record(Frequency::OBJECT_TYPE, i);
            c.required_text("trip_id", &frequency.trip_id);
            c.required_text("start_time", &frequency.start_time);
            c.required_text("end_time", &frequency.end_time);
            c.required("headway_secs", &frequency.headway_secs);
            c.time("start_time", &frequency.start_time);
            c.time("end_time", &frequency.end_time);
            c.typed("headway_secs", &frequency.headway_secs);
            c.code("exact_times", &frequency.exact_times);
            c.reference("trip_id", &frequency.trip_id, &self.trips);
        }

        for (i, transfer) in self.transfers.iter().enumerate() {
            let mut c = v.record(Transfer::OBJECT_TYPE, i);
            c.required_text("from_stop_id", &transfer.from_stop_id);
            c.required_text("to_stop_id", &transfer.to_stop_id);
            c.code("transfer_type", &transfer.transfer_type);
            c.typed("min_transfer_time", &transfer.min_transfer_time);
            c.reference("from_stop_id", &transfer.from_stop_id, &self.stops);
            c.reference("to_stop_id", &transfer.to_stop_id, &self.stops);
        }

        for (i, info) in self.feed_info.iter().enumerate() {
            let mut c = v.record(FeedInfo::OBJECT_TYPE, i);
            c.required_text("feed_publisher_name", &info.name);
            c.required_text("feed_publisher_url", &info.url);
            c.required_text("feed_lang", &info.lang);
            c.date("feed_start_date", &info.start_date);
            c.date("feed_end_date", &info.end_date);
        }

        for (i, level) in self.levels.iter().enumerate() {
            let mut c = v.record(Level::OBJECT_TYPE, i);
            c.required_text("level_id", &level.id);
            c.required("level_index", &level.index);
            c.typed("level_index", &level.index);
        }
        v.duplicated_ids(&self.levels);

        let report = ValidationReport {
            problems: v.problems,
        };
        info!("validation done, {} problems found", report.len());
        report
    }

    /// Boarding areas belong to a platform, every other location to a station
    fn check_parent_station(&self, row: usize, stop: &Stop, v: &mut Validator) {
        let parent_id = match stop.parent_station.as_deref() {
            Some(id) if !id.trim().is_empty() => id,
            _ => return,
        };
        if let Some(parent) = self.stops.get_by_id(parent_id) {
            let expected = match stop.effective_location_type() {
                LocationType::BoardingArea => LocationType::StopPoint,
                _ => LocationType::StopArea,
            };
            let found = parent.effective_location_type();
            if found != expected {
                v.problems.push(Problem::InvalidParentStation {
                    row,
                    parent_station: normalize_id(parent_id),
                    found: found.code(),
                });
            }
        }
    }
}
