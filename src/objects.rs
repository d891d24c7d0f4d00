pub use crate::enums::*;
use crate::parsing::{default_route_color, parse_color, parse_date, parse_time};
use crate::row_serde;
use crate::value::de_value;
pub use crate::value::{Value, ValueField};
use crate::Row;
use chrono::{Datelike, NaiveDate, Weekday};
use log::error;
use rgb::RGB8;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// One line of a GTFS file, with its typed and named fields
///
/// Every field is optional: `None` means the value is unset, which is different from a text
/// set to the empty string. Nothing is validated when building a record, see [crate::Feed::validate].
///
/// The serde derive of the record gives the names of its columns and their order.
pub trait Record: Serialize + DeserializeOwned + Default {
    /// Name of the file holding those records
    const FILE_NAME: &'static str;
    /// What kind of object it is
    const OBJECT_TYPE: ObjectType;

    /// The columns, in the canonical order of the file
    fn columns() -> &'static [&'static str] {
        row_serde::field_names::<Self>()
    }

    /// Builds the record from one row. Unknown columns are ignored, absent columns are unset
    ///
    /// Text that cannot be read as the type of its column is kept as a [Value::Invalid]
    fn from_row(row: &Row) -> Self {
        row_serde::from_row(row).unwrap_or_else(|e| {
            error!("impossible to build a record of {}: {}", Self::FILE_NAME, e);
            Self::default()
        })
    }

    /// Every column of [Record::columns], in order, unset fields included
    fn export(&self) -> Row {
        row_serde::to_row(self).unwrap_or_else(|e| {
            error!("impossible to export a record of {}: {}", Self::FILE_NAME, e);
            Row::new()
        })
    }
}

/// Objects that have an identifier implement this trait
///
/// Those identifier are technical and should not be shown to travellers
pub trait Id {
    /// Identifier of the object, `None` when unset
    fn id(&self) -> Option<&str>;
}

/// Trait to introspect what is the object’s type (stop, route…)
pub trait Type {
    /// What is the type of the object
    fn object_type(&self) -> ObjectType;
}

impl<T: Record> Type for T {
    fn object_type(&self) -> ObjectType {
        T::OBJECT_TYPE
    }
}

/// A calender describes on which days the vehicle runs. See <https://gtfs.org/reference/static/#calendartxt>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calendar {
    /// Unique technical identifier (not for the traveller) of this calendar
    #[serde(rename = "service_id")]
    pub id: Option<String>,
    /// Does the service run on mondays
    #[serde(deserialize_with = "de_value")]
    pub monday: Option<Value<CalendarDay>>,
    /// Does the service run on tuesdays
    #[serde(deserialize_with = "de_value")]
    pub tuesday: Option<Value<CalendarDay>>,
    /// Does the service run on wednesdays
    #[serde(deserialize_with = "de_value")]
    pub wednesday: Option<Value<CalendarDay>>,
    /// Does the service run on thursdays
    #[serde(deserialize_with = "de_value")]
    pub thursday: Option<Value<CalendarDay>>,
    /// Does the service run on fridays
    #[serde(deserialize_with = "de_value")]
    pub friday: Option<Value<CalendarDay>>,
    /// Does the service run on saturdays
    #[serde(deserialize_with = "de_value")]
    pub saturday: Option<Value<CalendarDay>>,
    /// Does the service run on sundays
    #[serde(deserialize_with = "de_value")]
    pub sunday: Option<Value<CalendarDay>>,
    /// Start service day for the service interval, `YYYYMMDD`
    pub start_date: Option<String>,
    /// End service day for the service interval. This service day is included in the interval
    pub end_date: Option<String>,
}

impl Record for Calendar {
    const FILE_NAME: &'static str = "calendar.txt";
    const OBJECT_TYPE: ObjectType = ObjectType::Calendar;
}

impl Id for Calendar {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start_date.as_deref().unwrap_or_default(),
            self.end_date.as_deref().unwrap_or_default()
        )
    }
}

impl Calendar {
    /// The value of the column for the day of the week
    pub fn day(&self, weekday: Weekday) -> Option<CalendarDay> {
        match weekday {
            Weekday::Mon => self.monday.valid(),
            Weekday::Tue => self.tuesday.valid(),
            Weekday::Wed => self.wednesday.valid(),
            Weekday::Thu => self.thursday.valid(),
            Weekday::Fri => self.friday.valid(),
            Weekday::Sat => self.saturday.valid(),
            Weekday::Sun => self.sunday.valid(),
        }
    }

    /// Returns true if there is a service running on that day of the week
    pub fn valid_weekday(&self, date: NaiveDate) -> bool {
        self.day(date.weekday()) == Some(CalendarDay::Service)
    }

    /// The start date, if set and well formed
    pub fn start(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(|d| parse_date(d).ok())
    }

    /// The end date, if set and well formed
    pub fn end(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(|d| parse_date(d).ok())
    }
}

/// Defines a specific date that can be added or removed from a [Calendar]. See <https://gtfs.org/reference/static/#calendar_datestxt>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarDate {
    /// Identifier of the service that is modified at this date
    pub service_id: Option<String>,
    /// Date where the service will be added or deleted, `YYYYMMDD`
    pub date: Option<String>,
    /// Is the service added or deleted
    #[serde(deserialize_with = "de_value")]
    pub exception_type: Option<Value<Exception>>,
}

impl Record for CalendarDate {
    const FILE_NAME: &'static str = "calendar_dates.txt";
    const OBJECT_TYPE: ObjectType = ObjectType::CalendarDate;
}

impl Id for CalendarDate {
    fn id(&self) -> Option<&str> {
        self.service_id.as_deref()
    }
}

impl CalendarDate {
    /// The date, if set and well formed
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(|d| parse_date(d).ok())
    }
}

/// A physical stop, station or area. See <https://gtfs.org/reference/static/#stopstxt>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stop {
    /// Unique technical identifier (not for the traveller) of the stop
    #[serde(rename = "stop_id")]
    pub id: Option<String>,
    /// Short text or a number that identifies the location for riders
    #[serde(rename = "stop_code")]
    pub code: Option<String>,
    /// Name of the location. Use a name that people will understand in the local and tourist vernacular.
    /// Required unless [Stop::location_type] is [LocationType::GenericNode] or [LocationType::BoardingArea]
    #[serde(rename = "stop_name")]
    pub name: Option<String>,
    /// Description of the location that provides useful, quality information
    #[serde(rename = "stop_desc")]
    pub description: Option<String>,
    /// Latitude of the stop. Same condition as [Stop::name]
    #[serde(rename = "stop_lat", deserialize_with = "de_value")]
    pub latitude: Option<Value<f64>>,
    /// Longitude of the stop. Same condition as [Stop::name]
    #[serde(rename = "stop_lon", deserialize_with = "de_value")]
    pub longitude: Option<Value<f64>>,
    /// Identifies the fare zone for a stop
    pub zone_id: Option<String>,
    /// URL of a web page about the location
    #[serde(rename = "stop_url")]
    pub url: Option<String>,
    /// Type of the location. Unset means [LocationType::StopPoint]
    #[serde(deserialize_with = "de_value")]
    pub location_type: Option<Value<LocationType>>,
    /// Defines hierarchy between the different locations. Must reference a stop with [LocationType::StopArea]
    pub parent_station: Option<String>,
    /// Timezone of the location
    #[serde(rename = "stop_timezone")]
    pub timezone: Option<String>,
    /// Indicates whether wheelchair boardings are possible from the location
    #[serde(deserialize_with = "de_value")]
    pub wheelchair_boarding: Option<Value<Availability>>,
    /// Level of the location. References [Level]
    pub level_id: Option<String>,
    /// Platform identifier for a platform stop (a stop belonging to a station)
    pub platform_code: Option<String>,
}

impl Record for Stop {
    const FILE_NAME: &'static str = "stops.txt";
    const OBJECT_TYPE: ObjectType = ObjectType::Stop;
}

impl Id for Stop {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or_default())
    }
}

impl Stop {
    /// The location type, blank being a [LocationType::StopPoint]
    pub fn effective_location_type(&self) -> LocationType {
        self.location_type.valid().unwrap_or_default()
    }

    /// The wheelchair boarding, blank meaning that no information is available
    pub fn effective_wheelchair_boarding(&self) -> Availability {
        self.wheelchair_boarding.valid().unwrap_or_default()
    }

    /// Stops, stations and entrances must have a name and a position
    pub fn requires_name_and_position(&self) -> bool {
        matches!(
            self.effective_location_type(),
            LocationType::StopPoint | LocationType::StopArea | LocationType::StationEntrance
        )
    }

    /// Entrances, generic nodes and boarding areas must belong to a station
    pub fn requires_parent_station(&self) -> bool {
        matches!(
            self.effective_location_type(),
            LocationType::StationEntrance | LocationType::GenericNode | LocationType::BoardingArea
        )
    }
}

/// The moment where a vehicle, running on [Trip] stops at a [Stop]. See <https://gtfs.org/reference/static/#stopstimestxt>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopTime {
    /// [Trip] to which this stop time belongs to
    pub trip_id: Option<String>,
    /// Arrival time of the stop time, `HH:MM:SS`.
    /// It's an option since the intermediate stops can have have no arrival
    /// and this arrival needs to be interpolated
    pub arrival_time: Option<String>,
    /// Departure time of the stop time, `HH:MM:SS`
    pub departure_time: Option<String>,
    /// Identifier of the [Stop] where the vehicle stops
    pub stop_id: Option<String>,
    /// Order of stops for a particular trip. The values must increase along the trip but do not need to be consecutive
    #[serde(deserialize_with = "de_value")]
    pub stop_sequence: Option<Value<u32>>,
    /// Text that appears on signage identifying the trip's destination to riders
    pub stop_headsign: Option<String>,
    /// Indicates pickup method
    #[serde(deserialize_with = "de_value")]
    pub pickup_type: Option<Value<PickupDropOffType>>,
    /// Indicates drop off method
    #[serde(deserialize_with = "de_value")]
    pub drop_off_type: Option<Value<PickupDropOffType>>,
    /// Actual distance traveled along the associated shape, from the first stop to the stop specified in this record
    #[serde(deserialize_with = "de_value")]
    pub shape_dist_traveled: Option<Value<f64>>,
    /// Indicates if arrival and departure times for a stop are strictly adhered to by the vehicle or if they are instead approximate
    #[serde(deserialize_with = "de_value")]
    pub timepoint: Option<Value<TimepointType>>,
}

impl Record for StopTime {
    const FILE_NAME: &'static str = "stop_times.txt";
    const OBJECT_TYPE: ObjectType = ObjectType::StopTime;
}

impl Id for StopTime {
    fn id(&self) -> Option<&str> {
        self.trip_id.as_deref()
    }
}

impl StopTime {
    /// Arrival in seconds since the start of the service day, if set and well formed
    pub fn arrival_seconds(&self) -> Option<u32> {
        self.arrival_time.as_deref().and_then(|t| parse_time(t).ok())
    }

    /// Departure in seconds since the start of the service day, if set and well formed
    pub fn departure_seconds(&self) -> Option<u32> {
        self.departure_time
            .as_deref()
            .and_then(|t| parse_time(t).ok())
    }

    /// The pickup type, blank being a regular pickup
    pub fn effective_pickup_type(&self) -> PickupDropOffType {
        self.pickup_type.valid().unwrap_or_default()
    }

    /// The drop off type, blank being a regular drop off
    pub fn effective_drop_off_type(&self) -> PickupDropOffType {
        self.drop_off_type.valid().unwrap_or_default()
    }
}

/// A route is a commercial line (there can be various stop sequences for a same line). See <https://gtfs.org/reference/static/#routestxt>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    /// Unique technical (not for the traveller) identifier for the route
    #[serde(rename = "route_id")]
    pub id: Option<String>,
    /// Agency for the specified route. References [Agency]
    pub agency_id: Option<String>,
    /// Short name of a route. This will often be a short, abstract identifier like "32", "100X", or "Green"
    /// At least one of `short_name` or `long_name` must be specified
    #[serde(rename = "route_short_name")]
    pub short_name: Option<String>,
    /// Full name of a route. This name is generally more descriptive than the `short_name`
    #[serde(rename = "route_long_name")]
    pub long_name: Option<String>,
    /// Description of a route that provides useful, quality information
    #[serde(rename = "route_desc")]
    pub desc: Option<String>,
    /// Indicates the type of transportation used on a route
    #[serde(deserialize_with = "de_value")]
    pub route_type: Option<Value<RouteType>>,
    /// URL of a web page about the particular route
    #[serde(rename = "route_url")]
    pub url: Option<String>,
    /// Route color designation that matches public facing material, six characters hexadecimal
    #[serde(rename = "route_color")]
    pub color: Option<String>,
    /// Legible color to use for text drawn against a background of [Route::color]
    #[serde(rename = "route_text_color")]
    pub text_color: Option<String>,
}

impl Record for Route {
    const FILE_NAME: &'static str = "routes.txt";
    const OBJECT_TYPE: ObjectType = ObjectType::Route;
}

impl Id for Route {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.long_name.as_deref(), self.short_name.as_deref()) {
            (Some(long_name), _) if !long_name.is_empty() => write!(f, "{}", long_name),
            (_, Some(short_name)) => write!(f, "{}", short_name),
            _ => Ok(()),
        }
    }
}

impl Route {
    /// The route color, white when unset. `None` if the color is malformed
    pub fn parsed_color(&self) -> Option<RGB8> {
        parse_color(self.color.as_deref().unwrap_or_default(), default_route_color).ok()
    }

    /// The text color, black when unset. `None` if the color is malformed
    pub fn parsed_text_color(&self) -> Option<RGB8> {
        parse_color(self.text_color.as_deref().unwrap_or_default(), RGB8::default).ok()
    }

    /// At least one of the short and long names must be given
    pub fn has_name(&self) -> bool {
        [&self.short_name, &self.long_name]
            .iter()
            .any(|n| n.as_deref().map_or(false, |n| !n.trim().is_empty()))
    }
}

/// A Trip is a vehicle that follow a sequence of [StopTime] on certain days. See <https://gtfs.org/reference/static/#tripstxt>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trip {
    /// References along which [Route] this trip runs
    pub route_id: Option<String>,
    /// References the [Calendar] on which this trip runs
    pub service_id: Option<String>,
    /// Unique technical identifier (not for the traveller) for the Trip
    #[serde(rename = "trip_id")]
    pub id: Option<String>,
    /// Text that appears on signage identifying the trip's destination to riders
    pub trip_headsign: Option<String>,
    /// Public facing text used to identify the trip to riders
    pub trip_short_name: Option<String>,
    /// Indicates the direction of travel for a trip
    #[serde(deserialize_with = "de_value")]
    pub direction_id: Option<Value<DirectionType>>,
    /// Identifies the block to which the trip belongs
    pub block_id: Option<String>,
    /// Shape of the trip, references the `shape_id` of [ShapePoint]
    pub shape_id: Option<String>,
    /// Indicates wheelchair accessibility
    #[serde(deserialize_with = "de_value")]
    pub wheelchair_accessible: Option<Value<Availability>>,
    /// Indicates whether bikes are allowed
    #[serde(deserialize_with = "de_value")]
    pub bikes_allowed: Option<Value<Availability>>,
}

impl Record for Trip {
    const FILE_NAME: &'static str = "trips.txt";
    const OBJECT_TYPE: ObjectType = ObjectType::Trip;
}

impl Id for Trip {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "route id: {}, service id: {}",
            self.route_id.as_deref().unwrap_or_default(),
            self.service_id.as_deref().unwrap_or_default()
        )
    }
}

/// General informations about the agency running the network. See <https://gtfs.org/reference/static/#agencytxt>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Agency {
    /// Unique technical (not for the traveller) identifier for the Agency.
    /// Required when the feed holds more than one agency
    #[serde(rename = "agency_id")]
    pub id: Option<String>,
    /// Full name of the transit agency
    #[serde(rename = "agency_name")]
    pub name: Option<String>,
    /// Full url of the transit agency.
    #[serde(rename = "agency_url")]
    pub url: Option<String>,
    /// Timezone where the transit agency is located
    #[serde(rename = "agency_timezone")]
    pub timezone: Option<String>,
    /// Primary language used by this transit agency
    #[serde(rename = "agency_lang")]
    pub lang: Option<String>,
    /// A voice telephone number for the specified agency
    #[serde(rename = "agency_phone")]
    pub phone: Option<String>,
    /// URL of a web page that allows a rider to purchase tickets or other fare instruments for that agency online
    #[serde(rename = "agency_fare_url")]
    pub fare_url: Option<String>,
    /// Email address actively monitored by the agency’s customer service department
    #[serde(rename = "agency_email")]
    pub email: Option<String>,
}

impl Record for Agency {
    const FILE_NAME: &'static str = "agency.txt";
    const OBJECT_TYPE: ObjectType = ObjectType::Agency;
}

impl Id for Agency {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or_default())
    }
}

/// A single geographical point decribing the shape of a [Trip]. See <https://gtfs.org/reference/static/#shapestxt>
///
/// There is no shape record: a shape is every point sharing the same `shape_id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapePoint {
    /// Unique technical (not for the traveller) identifier for the Shape
    #[serde(rename = "shape_id")]
    pub id: Option<String>,
    /// Latitude of a shape point
    #[serde(rename = "shape_pt_lat", deserialize_with = "de_value")]
    pub latitude: Option<Value<f64>>,
    /// Longitude of a shape point
    #[serde(rename = "shape_pt_lon", deserialize_with = "de_value")]
    pub longitude: Option<Value<f64>>,
    /// Sequence in which the shape points connect to form the shape. Values increase along the trip but do not need to be consecutive.
    #[serde(rename = "shape_pt_sequence", deserialize_with = "de_value")]
    pub sequence: Option<Value<u32>>,
    /// Actual distance traveled along the shape from the first shape point to the point specified in this record
    #[serde(rename = "shape_dist_traveled", deserialize_with = "de_value")]
    pub dist_traveled: Option<Value<f64>>,
}

impl Record for ShapePoint {
    const FILE_NAME: &'static str = "shapes.txt";
    const OBJECT_TYPE: ObjectType = ObjectType::Shape;
}

impl Id for ShapePoint {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Defines one possible fare. See <https://gtfs.org/reference/static/#fare_attributestxt>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FareAttribute {
    /// Unique technical (not for the traveller) identifier for the FareAttribute
    #[serde(rename = "fare_id")]
    pub id: Option<String>,
    /// Fare price, in the unit specified by [FareAttribute::currency]
    pub price: Option<String>,
    /// Currency used to pay the fare.
    #[serde(rename = "currency_type")]
    pub currency: Option<String>,
    /// Indicates when the fare must be paid
    #[serde(deserialize_with = "de_value")]
    pub payment_method: Option<Value<PaymentMethod>>,
    /// Indicates the number of transfers permitted on this fare. Unset is unlimited
    #[serde(deserialize_with = "de_value")]
    pub transfers: Option<Value<Transfers>>,
    /// Identifies the relevant agency for a fare
    pub agency_id: Option<String>,
    /// Length of time in seconds before a transfer expires
    #[serde(deserialize_with = "de_value")]
    pub transfer_duration: Option<Value<u32>>,
}

impl Record for FareAttribute {
    const FILE_NAME: &'static str = "fare_attributes.txt";
    const OBJECT_TYPE: ObjectType = ObjectType::Fare;
}

impl Id for FareAttribute {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Rules to apply a [FareAttribute]. See <https://gtfs.org/reference/static/#fare_rulestxt>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FareRule {
    /// References the [FareAttribute]
    pub fare_id: Option<String>,
    /// The fare applies to this [Route]
    pub route_id: Option<String>,
    /// The fare applies to trips starting in this zone
    pub origin_id: Option<String>,
    /// The fare applies to trips ending in this zone
    pub destination_id: Option<String>,
    /// The fare applies to trips going through this zone
    pub contains_id: Option<String>,
}

impl Record for FareRule {
    const FILE_NAME: &'static str = "fare_rules.txt";
    const OBJECT_TYPE: ObjectType = ObjectType::FareRule;
}

impl Id for FareRule {
    fn id(&self) -> Option<&str> {
        self.fare_id.as_deref()
    }
}

/// Timetables can be defined by the frequency of their vehicles. See <https://gtfs.org/reference/static/#frequenciestxt>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frequency {
    /// References the [Trip] that uses frequency
    pub trip_id: Option<String>,
    /// Time at which the first vehicle departs from the first stop of the trip, `HH:MM:SS`
    pub start_time: Option<String>,
    /// Time at which service changes to a different headway (or ceases) at the first stop in the trip
    pub end_time: Option<String>,
    /// Time, in seconds, between departures from the same stop (headway) for the trip
    #[serde(deserialize_with = "de_value")]
    pub headway_secs: Option<Value<u32>>,
    /// Indicates the type of service for a trip
    #[serde(deserialize_with = "de_value")]
    pub exact_times: Option<Value<ExactTimes>>,
}

impl Record for Frequency {
    const FILE_NAME: &'static str = "frequencies.txt";
    const OBJECT_TYPE: ObjectType = ObjectType::Frequency;
}

impl Id for Frequency {
    fn id(&self) -> Option<&str> {
        self.trip_id.as_deref()
    }
}

impl Frequency {
    /// Start in seconds since the start of the service day, if set and well formed
    pub fn start_seconds(&self) -> Option<u32> {
        self.start_time.as_deref().and_then(|t| parse_time(t).ok())
    }

    /// End in seconds since the start of the service day, if set and well formed
    pub fn end_seconds(&self) -> Option<u32> {
        self.end_time.as_deref().and_then(|t| parse_time(t).ok())
    }
}

/// Transfer information between stops. See <https://gtfs.org/reference/static/#transferstxt>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transfer {
    /// [Stop] from which to make the transfer
    pub from_stop_id: Option<String>,
    /// [Stop] to which to make the transfer
    pub to_stop_id: Option<String>,
    /// Type of the transfer
    #[serde(deserialize_with = "de_value")]
    pub transfer_type: Option<Value<TransferType>>,
    /// Minimum time needed to make the transfer in seconds
    #[serde(deserialize_with = "de_value")]
    pub min_transfer_time: Option<Value<u32>>,
}

impl Record for Transfer {
    const FILE_NAME: &'static str = "transfers.txt";
    const OBJECT_TYPE: ObjectType = ObjectType::Transfer;
}

/// Meta-data about the feed. See <https://gtfs.org/reference/static/#feed_infotxt>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedInfo {
    /// Full name of the organization that publishes the dataset.
    #[serde(rename = "feed_publisher_name")]
    pub name: Option<String>,
    /// URL of the dataset publishing organization's website
    #[serde(rename = "feed_publisher_url")]
    pub url: Option<String>,
    /// Default language used for the text in this dataset
    #[serde(rename = "feed_lang")]
    pub lang: Option<String>,
    /// Defines the language that should be used when the data consumer doesn’t know the language of the rider
    pub default_lang: Option<String>,
    /// The dataset provides complete and reliable schedule information for service in the period from this date
    #[serde(rename = "feed_start_date")]
    pub start_date: Option<String>,
    /// The dataset provides complete and reliable schedule information for service until this date
    #[serde(rename = "feed_end_date")]
    pub end_date: Option<String>,
    /// String that indicates the current version of their GTFS dataset
    #[serde(rename = "feed_version")]
    pub version: Option<String>,
    /// Email address for communication regarding the GTFS dataset and data publishing practices
    #[serde(rename = "feed_contact_email")]
    pub contact_email: Option<String>,
    /// URL for contact information, a web-form, support desk, or other tools for communication regarding the GTFS dataset and data publishing practices
    #[serde(rename = "feed_contact_url")]
    pub contact_url: Option<String>,
}

impl Record for FeedInfo {
    const FILE_NAME: &'static str = "feed_info.txt";
    const OBJECT_TYPE: ObjectType = ObjectType::FeedInfo;
}

impl fmt::Display for FeedInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or_default())
    }
}

/// A level in a station. See <https://gtfs.org/reference/static/#levelstxt>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    /// Unique technical identifier of the level
    #[serde(rename = "level_id")]
    pub id: Option<String>,
    /// Numeric index of the level that indicates relative position. Ground level should have index 0
    #[serde(rename = "level_index", deserialize_with = "de_value")]
    pub index: Option<Value<f64>>,
    /// Name of the level as seen by the rider
    #[serde(rename = "level_name")]
    pub name: Option<String>,
}

impl Record for Level {
    const FILE_NAME: &'static str = "levels.txt";
    const OBJECT_TYPE: ObjectType = ObjectType::Level;
}

impl Id for Level {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
