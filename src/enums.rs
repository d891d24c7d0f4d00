use std::fmt;

/// Integer-coded enumerations of the GTFS
///
/// Codes outside of the documented set are kept (as an `Unknown`/`Other` variant) so that
/// a record can hold them and a validation pass can report them.
pub trait Code: Copy {
    /// The codes defined by the GTFS reference
    const KNOWN: &'static [i32];

    /// Builds the value from its integer code
    fn from_code(code: i32) -> Self;

    /// The integer code, as written in the files
    fn code(&self) -> i32;

    /// Is the code one of the documented ones
    fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.code())
    }
}

/// All the objects type from the GTFS specification that this library handles
#[derive(Debug, Serialize, Eq, PartialEq, Hash, Clone, Copy)]
pub enum ObjectType {
    /// [crate::Agency] <https://gtfs.org/reference/static/#agencytxt>
    Agency,
    /// [crate::Stop] <https://gtfs.org/reference/static/#stopstxt>
    Stop,
    /// [crate::Route] <https://gtfs.org/reference/static/#routestxt>
    Route,
    /// [crate::Trip] <https://gtfs.org/reference/static/#tripstxt>
    Trip,
    /// [crate::StopTime] <https://gtfs.org/reference/static/#stop_timestxt>
    StopTime,
    /// [crate::Calendar] <https://gtfs.org/reference/static/#calendartxt>
    Calendar,
    /// [crate::CalendarDate] <https://gtfs.org/reference/static/#calendar_datestxt>
    CalendarDate,
    /// [crate::ShapePoint] <https://gtfs.org/reference/static/#shapestxt>
    Shape,
    /// [crate::FareAttribute] <https://gtfs.org/reference/static/#fare_attributestxt>
    Fare,
    /// [crate::FareRule] <https://gtfs.org/reference/static/#fare_rulestxt>
    FareRule,
    /// [crate::Frequency] <https://gtfs.org/reference/static/#frequenciestxt>
    Frequency,
    /// [crate::Transfer] <https://gtfs.org/reference/static/#transferstxt>
    Transfer,
    /// [crate::FeedInfo] <https://gtfs.org/reference/static/#feed_infotxt>
    FeedInfo,
    /// [crate::Level] <https://gtfs.org/reference/static/#levelstxt>
    Level,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Describes the kind of [crate::Stop]. See <https://gtfs.org/reference/static/#stopstxt> `location_type`
#[derive(Derivative, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default(bound = ""))]
pub enum LocationType {
    /// Stop (or Platform). A location where passengers board or disembark from a transit vehicle. Is called a platform when defined within a parent_station
    #[derivative(Default)]
    StopPoint,
    /// Station. A physical structure or area that contains one or more platform
    StopArea,
    /// A location where passengers can enter or exit a station from the street
    StationEntrance,
    /// A location within a station, not matching any other [crate::Stop::location_type], used to link together pathways
    GenericNode,
    /// A specific location on a platform, where passengers can board and/or alight vehicles
    BoardingArea,
    /// An unknown value
    Unknown(i32),
}

impl Code for LocationType {
    const KNOWN: &'static [i32] = &[0, 1, 2, 3, 4];

    fn from_code(code: i32) -> Self {
        match code {
            0 => LocationType::StopPoint,
            1 => LocationType::StopArea,
            2 => LocationType::StationEntrance,
            3 => LocationType::GenericNode,
            4 => LocationType::BoardingArea,
            i => LocationType::Unknown(i),
        }
    }

    fn code(&self) -> i32 {
        match self {
            LocationType::StopPoint => 0,
            LocationType::StopArea => 1,
            LocationType::StationEntrance => 2,
            LocationType::GenericNode => 3,
            LocationType::BoardingArea => 4,
            LocationType::Unknown(i) => *i,
        }
    }
}

/// Describes the kind of [crate::Route]. See <https://gtfs.org/reference/static/#routestxt> `route_type`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RouteType {
    /// Tram, Streetcar, Light rail. Any light rail or street level system within a metropolitan area
    Tramway,
    /// Subway, Metro. Any underground rail system within a metropolitan area
    Subway,
    /// Used for intercity or long-distance travel
    Rail,
    /// Used for short- and long-distance bus routes
    Bus,
    /// Used for short- and long-distance boat service
    Ferry,
    /// Used for street-level rail cars where the cable runs beneath the vehicle
    CableCar,
    /// Aerial lift, suspended cable car
    Gondola,
    /// Any rail system designed for steep inclines
    Funicular,
    /// Electric buses that draw power from overhead wires using poles
    Trolleybus,
    /// Railway in which the track consists of a single rail or a beam
    Monorail,
    /// Any other value. They are invalid, but kept as is
    Other(i32),
}

impl Code for RouteType {
    const KNOWN: &'static [i32] = &[0, 1, 2, 3, 4, 5, 6, 7, 11, 12];

    fn from_code(code: i32) -> Self {
        match code {
            0 => RouteType::Tramway,
            1 => RouteType::Subway,
            2 => RouteType::Rail,
            3 => RouteType::Bus,
            4 => RouteType::Ferry,
            5 => RouteType::CableCar,
            6 => RouteType::Gondola,
            7 => RouteType::Funicular,
            11 => RouteType::Trolleybus,
            12 => RouteType::Monorail,
            i => RouteType::Other(i),
        }
    }

    fn code(&self) -> i32 {
        match self {
            RouteType::Tramway => 0,
            RouteType::Subway => 1,
            RouteType::Rail => 2,
            RouteType::Bus => 3,
            RouteType::Ferry => 4,
            RouteType::CableCar => 5,
            RouteType::Gondola => 6,
            RouteType::Funicular => 7,
            RouteType::Trolleybus => 11,
            RouteType::Monorail => 12,
            RouteType::Other(i) => *i,
        }
    }
}

/// Generic enum to define if a service (like wheelchair boarding) is available
#[derive(Derivative, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default(bound = ""))]
pub enum Availability {
    /// No information if the service is available
    #[derivative(Default)]
    InformationNotAvailable,
    /// The service is available
    Available,
    /// The service is not available
    NotAvailable,
    /// An unknown value not in the specification
    Unknown(i32),
}

impl Code for Availability {
    const KNOWN: &'static [i32] = &[0, 1, 2];

    fn from_code(code: i32) -> Self {
        match code {
            0 => Availability::InformationNotAvailable,
            1 => Availability::Available,
            2 => Availability::NotAvailable,
            i => Availability::Unknown(i),
        }
    }

    fn code(&self) -> i32 {
        match self {
            Availability::InformationNotAvailable => 0,
            Availability::Available => 1,
            Availability::NotAvailable => 2,
            Availability::Unknown(i) => *i,
        }
    }
}

/// Defines if a [crate::CalendarDate] is added or deleted from a [crate::Calendar]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Exception {
    /// There will be a service on that day
    Added,
    /// There won’t be a service on that day
    Deleted,
    /// An unknown value not in the specification
    Unknown(i32),
}

impl Code for Exception {
    const KNOWN: &'static [i32] = &[1, 2];

    fn from_code(code: i32) -> Self {
        match code {
            1 => Exception::Added,
            2 => Exception::Deleted,
            i => Exception::Unknown(i),
        }
    }

    fn code(&self) -> i32 {
        match self {
            Exception::Added => 1,
            Exception::Deleted => 2,
            Exception::Unknown(i) => *i,
        }
    }
}

/// Does a [crate::Calendar] run on a given day of the week
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CalendarDay {
    /// No service on that day of the week
    NoService,
    /// The service runs on that day of the week
    Service,
    /// An unknown value not in the specification
    Unknown(i32),
}

impl Code for CalendarDay {
    const KNOWN: &'static [i32] = &[0, 1];

    fn from_code(code: i32) -> Self {
        match code {
            0 => CalendarDay::NoService,
            1 => CalendarDay::Service,
            i => CalendarDay::Unknown(i),
        }
    }

    fn code(&self) -> i32 {
        match self {
            CalendarDay::NoService => 0,
            CalendarDay::Service => 1,
            CalendarDay::Unknown(i) => *i,
        }
    }
}

/// The direction of travel of a [crate::Trip]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DirectionType {
    /// Travel in one direction (e.g. outbound travel)
    Outbound,
    /// Travel in the opposite direction (e.g. inbound travel)
    Inbound,
    /// An unknown value not in the specification
    Unknown(i32),
}

impl Code for DirectionType {
    const KNOWN: &'static [i32] = &[0, 1];

    fn from_code(code: i32) -> Self {
        match code {
            0 => DirectionType::Outbound,
            1 => DirectionType::Inbound,
            i => DirectionType::Unknown(i),
        }
    }

    fn code(&self) -> i32 {
        match self {
            DirectionType::Outbound => 0,
            DirectionType::Inbound => 1,
            DirectionType::Unknown(i) => *i,
        }
    }
}

/// Describes if and how a traveller can board or alight the vehicle. See <https://gtfs.org/reference/static/#stop_timestxt> `pickup_type` and `drop_off_type`
#[derive(Derivative, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default(bound = ""))]
pub enum PickupDropOffType {
    /// Regularly scheduled pickup or drop off (default when empty).
    #[derivative(Default)]
    Regular,
    /// No pickup or drop off available.
    NotAvailable,
    /// Must phone agency to arrange pickup or drop off.
    ArrangeByPhone,
    /// Must coordinate with driver to arrange pickup or drop off.
    CoordinateWithDriver,
    /// An unknown value not in the specification
    Unknown(i32),
}

impl Code for PickupDropOffType {
    const KNOWN: &'static [i32] = &[0, 1, 2, 3];

    fn from_code(code: i32) -> Self {
        match code {
            0 => PickupDropOffType::Regular,
            1 => PickupDropOffType::NotAvailable,
            2 => PickupDropOffType::ArrangeByPhone,
            3 => PickupDropOffType::CoordinateWithDriver,
            i => PickupDropOffType::Unknown(i),
        }
    }

    fn code(&self) -> i32 {
        match self {
            PickupDropOffType::Regular => 0,
            PickupDropOffType::NotAvailable => 1,
            PickupDropOffType::ArrangeByPhone => 2,
            PickupDropOffType::CoordinateWithDriver => 3,
            PickupDropOffType::Unknown(i) => *i,
        }
    }
}

/// Are the arrival and departure times of a [crate::StopTime] exact
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TimepointType {
    /// Times are considered approximate
    Approximate,
    /// Times are considered exact
    Exact,
    /// An unknown value not in the specification
    Unknown(i32),
}

impl Code for TimepointType {
    const KNOWN: &'static [i32] = &[0, 1];

    fn from_code(code: i32) -> Self {
        match code {
            0 => TimepointType::Approximate,
            1 => TimepointType::Exact,
            i => TimepointType::Unknown(i),
        }
    }

    fn code(&self) -> i32 {
        match self {
            TimepointType::Approximate => 0,
            TimepointType::Exact => 1,
            TimepointType::Unknown(i) => *i,
        }
    }
}

/// Defines where a [crate::FareAttribute] can be paid
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    /// Paid on board
    Aboard,
    /// Must be paid before boarding
    PreBoarding,
    /// An unknown value not in the specification
    Unknown(i32),
}

impl Code for PaymentMethod {
    const KNOWN: &'static [i32] = &[0, 1];

    fn from_code(code: i32) -> Self {
        match code {
            0 => PaymentMethod::Aboard,
            1 => PaymentMethod::PreBoarding,
            i => PaymentMethod::Unknown(i),
        }
    }

    fn code(&self) -> i32 {
        match self {
            PaymentMethod::Aboard => 0,
            PaymentMethod::PreBoarding => 1,
            PaymentMethod::Unknown(i) => *i,
        }
    }
}

/// Defines how many transfers can be done with on [crate::FareAttribute]. Unset means unlimited
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Transfers {
    /// No transfer can be done
    NoTransfer,
    /// Only one transfer can be done
    UniqueTransfer,
    /// Two transfers can be done
    TwoTransfers,
    /// An unknown value not in the specification
    Unknown(i32),
}

impl Code for Transfers {
    const KNOWN: &'static [i32] = &[0, 1, 2];

    fn from_code(code: i32) -> Self {
        match code {
            0 => Transfers::NoTransfer,
            1 => Transfers::UniqueTransfer,
            2 => Transfers::TwoTransfers,
            i => Transfers::Unknown(i),
        }
    }

    fn code(&self) -> i32 {
        match self {
            Transfers::NoTransfer => 0,
            Transfers::UniqueTransfer => 1,
            Transfers::TwoTransfers => 2,
            Transfers::Unknown(i) => *i,
        }
    }
}

/// Defines the type of service of a [crate::Frequency]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ExactTimes {
    /// Frequency-based trips
    FrequencyBased,
    /// Schedule-based trips with the exact same headway throughout the day
    ScheduleBased,
    /// An unknown value not in the specification
    Unknown(i32),
}

impl Code for ExactTimes {
    const KNOWN: &'static [i32] = &[0, 1];

    fn from_code(code: i32) -> Self {
        match code {
            0 => ExactTimes::FrequencyBased,
            1 => ExactTimes::ScheduleBased,
            i => ExactTimes::Unknown(i),
        }
    }

    fn code(&self) -> i32 {
        match self {
            ExactTimes::FrequencyBased => 0,
            ExactTimes::ScheduleBased => 1,
            ExactTimes::Unknown(i) => *i,
        }
    }
}

/// Defines the type of a [crate::Transfer]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TransferType {
    /// Recommended transfer point between routes
    Recommended,
    /// Departing vehicle waits for arriving one
    Timed,
    /// Transfer requires a minimum amount of time between arrival and departure to ensure a connection.
    MinTime,
    /// Transfer is not possible at this location
    Impossible,
    /// Passengers can stay in the vehicle between the two trips
    InSeat,
    /// Passengers must alight and re-board the vehicle between the two trips
    ReBoard,
    /// An unknown value not in the specification
    Unknown(i32),
}

impl Code for TransferType {
    const KNOWN: &'static [i32] = &[0, 1, 2, 3, 4, 5];

    fn from_code(code: i32) -> Self {
        match code {
            0 => TransferType::Recommended,
            1 => TransferType::Timed,
            2 => TransferType::MinTime,
            3 => TransferType::Impossible,
            4 => TransferType::InSeat,
            5 => TransferType::ReBoard,
            i => TransferType::Unknown(i),
        }
    }

    fn code(&self) -> i32 {
        match self {
            TransferType::Recommended => 0,
            TransferType::Timed => 1,
            TransferType::MinTime => 2,
            TransferType::Impossible => 3,
            TransferType::InSeat => 4,
            TransferType::ReBoard => 5,
            TransferType::Unknown(i) => *i,
        }
    }
}
