use crate::objects::*;
use crate::{
    read_rows, Collection, CsvTables, Error, Feed, FeedReader, Problem, Row, RowSource, Shapes,
};
use chrono::NaiveDate;
use rgb::RGB8;
use std::collections::HashMap;

fn basic_tables() -> CsvTables {
    CsvTables::default()
        .with("agency.txt", include_str!("../fixtures/basic/agency.txt"))
        .with("stops.txt", include_str!("../fixtures/basic/stops.txt"))
        .with("routes.txt", include_str!("../fixtures/basic/routes.txt"))
        .with("trips.txt", include_str!("../fixtures/basic/trips.txt"))
        .with("stop_times.txt", include_str!("../fixtures/basic/stop_times.txt"))
        .with("calendar.txt", include_str!("../fixtures/basic/calendar.txt"))
        .with(
            "calendar_dates.txt",
            include_str!("../fixtures/basic/calendar_dates.txt"),
        )
        .with("shapes.txt", include_str!("../fixtures/basic/shapes.txt"))
        .with(
            "fare_attributes.txt",
            include_str!("../fixtures/basic/fare_attributes.txt"),
        )
        .with("fare_rules.txt", include_str!("../fixtures/basic/fare_rules.txt"))
        .with(
            "frequencies.txt",
            include_str!("../fixtures/basic/frequencies.txt"),
        )
        .with("transfers.txt", include_str!("../fixtures/basic/transfers.txt"))
        .with("feed_info.txt", include_str!("../fixtures/basic/feed_info.txt"))
        .with("levels.txt", include_str!("../fixtures/basic/levels.txt"))
}

fn basic_feed() -> Feed {
    FeedReader::default()
        .read(&basic_tables())
        .expect("impossible to read gtfs")
}

fn stop(id: &str, location_type: Option<LocationType>, parent: Option<&str>) -> Stop {
    Stop {
        id: Some(id.to_owned()),
        name: Some(id.to_owned()),
        latitude: Some(Value::Valid(48.8)),
        longitude: Some(Value::Valid(2.3)),
        location_type: location_type.map(Value::from),
        parent_station: parent.map(|p| p.to_owned()),
        ..Stop::default()
    }
}

#[test]
fn read_calendar() {
    let gtfs = basic_feed();
    assert_eq!(1, gtfs.calendar.len());
    let calendar = gtfs.calendar.get_by_id("service1").unwrap();
    assert_eq!(Some(CalendarDay::NoService), calendar.monday.valid());
    assert_eq!(Some(CalendarDay::Service), calendar.saturday.valid());
    assert_eq!(NaiveDate::from_ymd_opt(2017, 1, 15), calendar.end());
}

#[test]
fn read_calendar_dates() {
    let gtfs = basic_feed();
    assert_eq!(3, gtfs.calendar_dates.len());
    let service1: Vec<_> = gtfs.calendar_dates.for_service("service1").collect();
    assert_eq!(2, service1.len());
    assert_eq!(Some(Exception::Deleted), service1[0].exception_type.valid());
    assert_eq!(
        Some(Exception::Added),
        gtfs.calendar_dates
            .get_by_id("service2")
            .unwrap()
            .exception_type
            .valid()
    );
    assert!(gtfs
        .calendar_dates
        .exists_by_service_and_date("service1", "20170104"));
    assert!(!gtfs
        .calendar_dates
        .exists_by_service_and_date("service2", "20170104"));
}

#[test]
fn read_stop() {
    let gtfs = basic_feed();
    assert_eq!(7, gtfs.stops.len());
    let stop1 = gtfs.stops.get_by_id("stop1").unwrap();
    assert_eq!(Some(LocationType::StopArea), stop1.location_type.valid());
    let stop2 = gtfs.stops.get_by_id("stop2").unwrap();
    assert_eq!(Some(LocationType::StopPoint), stop2.location_type.valid());
    assert_eq!(Some(48.796_058), stop2.latitude.valid());
    assert_eq!(
        Some("stop1".to_owned()),
        gtfs.stops.get_by_id("stop3").unwrap().parent_station
    );
    let stop5 = gtfs.stops.get_by_id("stop5").unwrap();
    assert_eq!(None, stop5.location_type.valid());
    assert_eq!(LocationType::StopPoint, stop5.effective_location_type());
    let stop6 = gtfs.stops.get_by_id("stop6").unwrap();
    assert_eq!(Some(LocationType::GenericNode), stop6.location_type.valid());
    assert_eq!(None, stop6.latitude);
    assert_eq!(None, stop6.name);
}

#[test]
fn stop_hierarchy() {
    let gtfs = basic_feed();
    let stations: Vec<_> = gtfs.stops.stations().filter_map(|s| s.id()).collect();
    assert_eq!(vec!["stop1"], stations);
    let children: Vec<_> = gtfs
        .stops
        .children_of("stop1")
        .filter_map(|s| s.id())
        .collect();
    assert_eq!(vec!["stop2", "stop3", "stop4", "stop6"], children);
    assert_eq!(1, gtfs.stops.children_of("stop2").count());
}

#[test]
fn read_routes() {
    let gtfs = basic_feed();
    assert_eq!(2, gtfs.routes.len());
    let route = gtfs.routes.get_by_id("1").unwrap();
    assert_eq!(Some(RouteType::Bus), route.route_type.valid());
    assert_eq!(Some(RGB8::new(0, 0, 0)), route.parsed_color());
    assert_eq!(Some(RGB8::new(255, 255, 255)), route.parsed_text_color());
    assert_eq!("100", format!("{}", route));
    assert_eq!(
        Some(RouteType::Other(42)),
        gtfs.routes.get_by_id("invalid_type").unwrap().route_type.valid()
    );
    assert_eq!(2, gtfs.routes.by_agency(1).count());
}

#[test]
fn route_colors_default() {
    let route = Route::default();
    assert_eq!(Some(RGB8::new(255, 255, 255)), route.parsed_color());
    assert_eq!(Some(RGB8::new(0, 0, 0)), route.parsed_text_color());
    let route = Route {
        color: Some("red".to_owned()),
        ..Route::default()
    };
    assert_eq!(None, route.parsed_color());
}

#[test]
fn read_trips() {
    let gtfs = basic_feed();
    assert_eq!(1, gtfs.trips.len());
    assert_eq!(1, gtfs.trips.by_route("1").count());
    assert_eq!(0, gtfs.trips.by_route("invalid_type").count());
    assert_eq!(1, gtfs.trips.by_service("service1").count());
    assert_eq!(
        Some(DirectionType::Outbound),
        gtfs.trips.get_by_id("trip1").unwrap().direction_id.valid()
    );
}

#[test]
fn read_stop_times() {
    let gtfs = basic_feed();
    let stop_times: Vec<_> = gtfs.stop_times.for_trip("trip1").collect();
    assert_eq!(2, stop_times.len());
    assert_eq!(Some(PickupDropOffType::Regular), stop_times[0].pickup_type.valid());
    assert_eq!(
        Some(PickupDropOffType::NotAvailable),
        stop_times[0].drop_off_type.valid()
    );
    assert_eq!(
        Some(PickupDropOffType::ArrangeByPhone),
        stop_times[1].pickup_type.valid()
    );
    assert_eq!(None, stop_times[1].drop_off_type);
    assert_eq!(
        PickupDropOffType::Regular,
        stop_times[1].effective_drop_off_type()
    );
    assert_eq!(Some(14 * 3600), stop_times[0].arrival_seconds());
    assert_eq!(Some(2), stop_times[1].stop_sequence.valid());
}

#[test]
fn read_agencies() {
    let gtfs = basic_feed();
    let agency = gtfs.agencies.get(0).unwrap();
    assert_eq!(Some("BIBUS".to_owned()), agency.name);
    assert_eq!(Some("http://www.bibus.fr".to_owned()), agency.url);
    assert_eq!(Some("Europe/Paris".to_owned()), agency.timezone);
}

#[test]
fn read_shapes() {
    let gtfs = basic_feed();
    assert_eq!(vec!["A_shp"], gtfs.shapes.shape_ids());
    let points: Vec<_> = gtfs.shapes.points_of("A_shp").collect();
    assert_eq!(3, points.len());
    assert_eq!(Some(37.61956), points[0].latitude.valid());
    assert_eq!(Some(-122.48161), points[0].longitude.valid());

    let sequences: Vec<_> = gtfs
        .shapes
        .sorted_points_of("A_shp")
        .iter()
        .map(|p| p.sequence.valid())
        .collect();
    assert_eq!(vec![Some(1), Some(6), Some(11)], sequences);
}

#[test]
fn read_fare_attributes() {
    let gtfs = basic_feed();
    assert_eq!(1, gtfs.fare_attributes.len());
    let fare = gtfs.fare_attributes.get_by_id(50).unwrap();
    assert_eq!(Some("1.50".to_owned()), fare.price);
    assert_eq!(Some("EUR".to_owned()), fare.currency);
    assert_eq!(Some(PaymentMethod::Aboard), fare.payment_method.valid());
    assert_eq!(None, fare.transfers);
    assert_eq!(Some("1".to_owned()), fare.agency_id);
    assert_eq!(Some(3600), fare.transfer_duration.valid());
    assert!(gtfs.fare_rules.exists_by_id("50"));
}

#[test]
fn read_frequencies_transfers_and_levels() {
    let gtfs = basic_feed();
    let frequency = gtfs.frequencies.for_trip("trip1").next().unwrap();
    assert_eq!(Some(600), frequency.headway_secs.valid());
    assert_eq!(Some(5 * 3600), frequency.start_seconds());
    assert_eq!(Some(ExactTimes::FrequencyBased), frequency.exact_times.valid());

    let transfer = gtfs.transfers.get(0).unwrap();
    assert_eq!(Some(TransferType::MinTime), transfer.transfer_type.valid());
    assert_eq!(Some(60), transfer.min_transfer_time.valid());

    assert_eq!(Some(-1.0), gtfs.levels.get_by_id("L1").unwrap().index.valid());
}

#[test]
fn read_feed_info() {
    let gtfs = basic_feed();
    let feed = gtfs.feed_info.get(0).unwrap();
    assert_eq!(1, gtfs.feed_info.len());
    assert_eq!(Some("SNCF".to_owned()), feed.name);
    assert_eq!(Some("http://www.sncf.com".to_owned()), feed.url);
    assert_eq!(Some("fr".to_owned()), feed.lang);
    assert_eq!(Some("20180709".to_owned()), feed.start_date);
    assert_eq!(Some("0.3".to_owned()), feed.version);
}

#[test]
fn trip_days() {
    let gtfs = basic_feed();
    let start = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
    assert_eq!(vec![3, 6, 7, 13, 14], gtfs.trip_days("service1", start));
    assert_eq!(vec![0], gtfs.trip_days("service2", start));
    assert!(gtfs.trip_days("unknown", start).is_empty());
}

#[test]
fn trip_days_stop_at_the_last_offset() {
    let mut gtfs = Feed::default();
    gtfs.calendar.add(Calendar {
        id: Some("sundays".to_owned()),
        sunday: Some(CalendarDay::Service.into()),
        start_date: Some("20170101".to_owned()),
        end_date: Some("21991231".to_owned()),
        ..Calendar::default()
    });
    gtfs.calendar_dates.add(CalendarDate {
        service_id: Some("sundays".to_owned()),
        date: Some("21990101".to_owned()),
        exception_type: Some(Exception::Added.into()),
    });
    let start = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
    let days = gtfs.trip_days("sundays", start);
    assert_eq!(Some(&0), days.first());
    assert!(days.iter().all(|d| d % 7 == 0));
    assert!(days.windows(2).all(|w| w[1] - w[0] == 7));
    // 2017-01-01 is a sunday and 65535 days later a monday
    assert_eq!(Some(&65_534), days.last());
    assert_eq!(65_534 / 7 + 1, days.len());
}

#[test]
fn missing_mandatory_file() {
    let tables = CsvTables::default()
        .with("agency.txt", include_str!("../fixtures/basic/agency.txt"))
        .with("routes.txt", include_str!("../fixtures/basic/routes.txt"))
        .with("trips.txt", include_str!("../fixtures/basic/trips.txt"))
        .with("stop_times.txt", include_str!("../fixtures/basic/stop_times.txt"));
    match FeedReader::default().read(&tables) {
        Err(Error::MissingFile(file)) => assert_eq!("stops.txt", file),
        other => panic!("expected a missing file, got {:?}", other),
    }
}

#[test]
fn read_without_stop_times_and_shapes() {
    let mut tables = basic_tables();
    tables.insert("stop_times.txt", "not,a,valid\nfile");
    let gtfs = FeedReader::default()
        .without_stop_times()
        .without_shapes()
        .read(&tables)
        .expect("impossible to read gtfs");
    assert!(gtfs.stop_times.is_empty());
    assert!(gtfs.shapes.is_empty());
    assert_eq!(2, gtfs.routes.len());
}

#[test]
fn unreadable_text_is_kept() {
    let tables = basic_tables()
        .with(
            "routes.txt",
            "route_id,route_short_name,route_type\n1,1,3\n2,2,bus\n",
        )
        .with(
            "stops.txt",
            "stop_id,stop_name,stop_lat,stop_lon\nstop1,Gare,abc,2.44\nstop2,Port,48.79,2.44\n",
        );
    let gtfs = FeedReader::default()
        .read(&tables)
        .expect("unreadable values should not fail the read");
    assert_eq!(2, gtfs.routes.len());

    let route = gtfs.routes.get_by_id("2").unwrap();
    assert_eq!(Some(Value::Invalid("bus".to_owned())), route.route_type);
    assert_eq!(None, route.route_type.valid());
    assert_eq!(Some("bus"), route.export().get("route_type"));

    let stop = gtfs.stops.get_by_id("stop1").unwrap();
    assert_eq!(Some(Value::Invalid("abc".to_owned())), stop.latitude);
    assert_eq!(Some("abc"), stop.export().get("stop_lat"));
    assert_eq!(Some("2.44"), stop.export().get("stop_lon"));

    let invalid: Vec<_> = gtfs
        .validate()
        .problems
        .into_iter()
        .filter_map(|p| match p {
            Problem::InvalidValue {
                object_type,
                field,
                value,
                ..
            } => Some((object_type, field, value)),
            _ => None,
        })
        .collect();
    assert_eq!(
        vec![
            (ObjectType::Stop, "stop_lat", "abc".to_owned()),
            (ObjectType::Route, "route_type", "bus".to_owned()),
        ],
        invalid
    );
}

#[test]
fn unreadable_numbers_are_exported_unchanged() {
    let row = Row::new()
        .with("shape_id", "A")
        .with("shape_pt_lat", "48,79")
        .with("shape_pt_lon", "NaN")
        .with("shape_pt_sequence", "-1")
        .with("shape_dist_traveled", "inf");
    let point = ShapePoint::from_row(&row);
    assert_eq!(None, point.latitude.valid());
    assert_eq!(None, point.longitude.valid());
    assert_eq!(None, point.sequence.valid());
    assert_eq!(None, point.dist_traveled.valid());
    let exported = point.export();
    assert_eq!(Some("48,79"), exported.get("shape_pt_lat"));
    assert_eq!(Some("NaN"), exported.get("shape_pt_lon"));
    assert_eq!(Some("-1"), exported.get("shape_pt_sequence"));
    assert_eq!(Some("inf"), exported.get("shape_dist_traveled"));
    assert_eq!(point, ShapePoint::from_row(&exported));

    let mut feed = Feed::default();
    feed.shapes.add(point);
    let fields: Vec<_> = feed
        .validate()
        .problems
        .into_iter()
        .filter_map(|p| match p {
            Problem::InvalidValue { field, .. } => Some(field),
            _ => None,
        })
        .collect();
    assert_eq!(
        vec![
            "shape_pt_lat",
            "shape_pt_lon",
            "shape_pt_sequence",
            "shape_dist_traveled"
        ],
        fields
    );
}

#[test]
fn read_from_parsed_rows() {
    let mut rows = HashMap::new();
    rows.insert(
        "agency.txt".to_owned(),
        vec![Row::new().with("agency_name", "BIBUS")],
    );
    rows.insert(
        "stops.txt".to_owned(),
        vec![Row::new().with("stop_id", "12").with("stop_name", "Gare")],
    );
    rows.insert("routes.txt".to_owned(), vec![]);
    rows.insert("trips.txt".to_owned(), vec![]);
    let gtfs = FeedReader::default()
        .read_stop_times(false)
        .read(&rows)
        .expect("impossible to read rows");
    assert!(gtfs.stops.exists_by_id(12));
    assert_eq!(1, gtfs.agencies.len());
}

#[test]
fn ids_are_compared_as_trimmed_strings() {
    let mut stops = Collection::new();
    stops.add(stop(" 12 ", None, None));
    assert!(stops.exists_by_id("12"));
    assert!(stops.exists_by_id(12));
    assert!(stops.exists_by_id(" 12"));
    assert!(!stops.exists_by_id("012"));
    assert!(!stops.exists_by_id(12.5));
}

#[test]
fn lookup_miss_is_false() {
    let stops: Collection<Stop> = Collection::new();
    assert!(!stops.exists_by_id("nonexistent"));
    assert!(stops.get_by_id("nonexistent").is_none());

    let mut stops = Collection::new();
    stops.add(Stop::default());
    assert!(!stops.exists_by_id(""));
    assert!(!stops.exists_by_id("nonexistent"));
}

#[test]
fn shapes_existence() {
    let mut shapes = Shapes::new();
    assert!(!shapes.exists_by_id(""));
    shapes.add(ShapePoint {
        id: Some("A_shape".to_owned()),
        latitude: Some(Value::Valid(37.61956)),
        longitude: Some(Value::Valid(-122.48161)),
        sequence: Some(Value::Valid(1)),
        ..ShapePoint::default()
    });
    assert!(shapes.exists_by_id("A_shape"));
    assert!(!shapes.exists_by_id("B_shape"));
    assert!(!shapes.exists_by_id(""));
}

#[test]
fn insertion_order_is_kept() {
    let mut routes = Collection::new();
    for id in &["c", "a", "b", "a"] {
        routes.add(Route {
            id: Some((*id).to_owned()),
            ..Route::default()
        });
    }
    let ids: Vec<_> = routes.iter().filter_map(|r| r.id()).collect();
    assert_eq!(vec!["c", "a", "b", "a"], ids);
    let exported: Vec<_> = routes
        .export_all()
        .iter()
        .map(|row| row.get("route_id").unwrap().to_owned())
        .collect();
    assert_eq!(vec!["c", "a", "b", "a"], exported);
    assert_eq!(2, routes.all_by_id("a").count());
    assert_eq!(1, routes.duplicates().len());
}

#[test]
fn route_export_order() {
    let route = Route {
        id: Some("R1".to_owned()),
        short_name: Some("32".to_owned()),
        route_type: Some(RouteType::Bus.into()),
        ..Route::default()
    };
    let row = route.export();
    assert_eq!(9, row.len());
    let names: Vec<_> = row.names().collect();
    assert_eq!(
        vec![
            "route_id",
            "agency_id",
            "route_short_name",
            "route_long_name",
            "route_desc",
            "route_type",
            "route_url",
            "route_color",
            "route_text_color"
        ],
        names
    );
    assert_eq!(Some("R1"), row.get("route_id"));
    assert_eq!(Some("32"), row.get("route_short_name"));
    assert_eq!(Some("3"), row.get("route_type"));
    assert_eq!(Some(None), row.value("agency_id"));
    assert_eq!(Some(None), row.value("route_text_color"));
}

#[test]
fn unset_and_empty_are_distinct() {
    let unset = Route {
        id: Some("R1".to_owned()),
        ..Route::default()
    };
    let empty = Route {
        desc: Some(String::new()),
        ..unset.clone()
    };
    assert_eq!(Some(None), unset.export().value("route_desc"));
    assert_eq!(Some(Some("")), empty.export().value("route_desc"));
    assert_ne!(unset.export(), empty.export());

    assert_eq!(unset, Route::from_row(&unset.export()));
    assert_eq!(empty, Route::from_row(&empty.export()));

    let unset_json = serde_json::to_string(&unset.export()).unwrap();
    let empty_json = serde_json::to_string(&empty.export()).unwrap();
    assert!(unset_json.contains(r#""route_desc":null"#));
    assert!(empty_json.contains(r#""route_desc":"""#));
}

#[test]
fn json_rows() {
    let gtfs = basic_feed();
    let stop = gtfs.stops.get_by_id("stop3").unwrap();
    let json = serde_json::to_string(&stop.export()).unwrap();
    assert!(json.starts_with(r#"{"stop_id":"stop3","stop_code":null,"#));
    let row: Row = serde_json::from_str(&json).unwrap();
    assert_eq!(stop, &Stop::from_row(&row));
}

#[test]
fn csv_rows() {
    let gtfs = basic_feed();
    let mut buffer = Vec::new();
    gtfs.stops.write_csv(&mut buffer).unwrap();
    let text = String::from_utf8(buffer.clone()).unwrap();
    assert!(text.starts_with("stop_id,stop_code,stop_name,stop_desc,stop_lat,stop_lon,"));
    assert!(text.contains("stop6,,,,,,,,3,stop1,,,,"));

    let rows = read_rows(buffer.as_slice(), "stops.txt").unwrap();
    assert_eq!(gtfs.stops, Collection::from_rows(&rows));
}

#[test]
fn unknown_columns_are_ignored() {
    let row = Row::new()
        .with("level_id", "L0")
        .with("level_index", " 1.5 ")
        .with("elevation", "12");
    let level = Level::from_row(&row);
    assert_eq!(Some("L0".to_owned()), level.id);
    assert_eq!(Some(1.5), level.index.valid());
    assert_eq!(None, level.name);
    assert!(!level.export().contains("elevation"));
}

#[test]
fn calendar_date_keeps_unknown_exceptions() {
    let mut dates = Collection::new();
    for code in &["1", "2", "0", "3"] {
        let row = Row::new()
            .with("service_id", "s1")
            .with("date", "20170101")
            .with("exception_type", *code);
        dates.add(CalendarDate::from_row(&row));
    }
    let exceptions: Vec<_> = dates.iter().map(|d| d.exception_type.valid()).collect();
    assert_eq!(
        vec![
            Some(Exception::Added),
            Some(Exception::Deleted),
            Some(Exception::Unknown(0)),
            Some(Exception::Unknown(3))
        ],
        exceptions
    );
    assert_eq!(Some("3"), dates.get(3).unwrap().export().get("exception_type"));
}

#[test]
fn object_type() {
    let gtfs = basic_feed();
    assert_eq!(
        ObjectType::Stop,
        gtfs.stops.get(0).unwrap().object_type()
    );
    assert_eq!(ObjectType::Shape, ShapePoint::OBJECT_TYPE);
    assert_eq!("shapes.txt", ShapePoint::FILE_NAME);
}

#[test]
fn export_all_tables() {
    let gtfs = basic_feed();
    let files: Vec<_> = gtfs.export_all().iter().map(|(f, _)| *f).collect();
    assert_eq!(14, files.len());
    assert_eq!("agency.txt", files[0]);
    assert_eq!("levels.txt", files[13]);

    let tables: HashMap<String, Vec<Row>> = gtfs
        .export_all()
        .into_iter()
        .map(|(file, rows)| (file.to_owned(), rows))
        .collect();
    let reread = FeedReader::default().read(&tables).unwrap();
    assert_eq!(gtfs.agencies, reread.agencies);
    assert_eq!(gtfs.stops, reread.stops);
    assert_eq!(gtfs.routes, reread.routes);
    assert_eq!(gtfs.trips, reread.trips);
    assert_eq!(gtfs.stop_times, reread.stop_times);
    assert_eq!(gtfs.calendar, reread.calendar);
    assert_eq!(gtfs.calendar_dates, reread.calendar_dates);
    assert_eq!(gtfs.fare_attributes, reread.fare_attributes);
    assert_eq!(gtfs.fare_rules, reread.fare_rules);
    assert_eq!(gtfs.shapes, reread.shapes);
    assert_eq!(gtfs.frequencies, reread.frequencies);
    assert_eq!(gtfs.transfers, reread.transfers);
    assert_eq!(gtfs.feed_info, reread.feed_info);
    assert_eq!(gtfs.levels, reread.levels);
    assert_eq!(tables.rows("levels.txt").unwrap().unwrap().len(), 2);

    let mut only_stops = Feed::default();
    only_stops.stops.add(stop("s1", None, None));
    let files: Vec<_> = only_stops.export_all().iter().map(|(f, _)| *f).collect();
    assert_eq!(vec!["stops.txt"], files);
}

fn empty_text_round_trip<T: Record + PartialEq + std::fmt::Debug>() {
    let blank: Row = T::columns().iter().map(|c| (*c, "")).collect();
    let record = T::from_row(&blank);
    let exported = record.export();
    assert_eq!(T::columns().to_vec(), exported.names().collect::<Vec<_>>());
    // typed columns read blank text as unset, text columns keep it
    assert!(exported.iter().all(|(_, v)| v == Some("") || v.is_none()));
    assert!(exported.iter().any(|(_, v)| v == Some("")), "{}", T::FILE_NAME);
    assert_eq!(record, T::from_row(&exported), "{}", T::FILE_NAME);

    let json = serde_json::to_string(&exported).unwrap();
    let from_json: Row = serde_json::from_str(&json).unwrap();
    assert_eq!(exported, from_json);
    assert_eq!(record, T::from_row(&from_json), "{}", T::FILE_NAME);
}

#[test]
fn empty_text_survives_row_round_trip() {
    empty_text_round_trip::<Agency>();
    empty_text_round_trip::<Stop>();
    empty_text_round_trip::<Route>();
    empty_text_round_trip::<Trip>();
    empty_text_round_trip::<StopTime>();
    empty_text_round_trip::<Calendar>();
    empty_text_round_trip::<CalendarDate>();
    empty_text_round_trip::<FareAttribute>();
    empty_text_round_trip::<FareRule>();
    empty_text_round_trip::<ShapePoint>();
    empty_text_round_trip::<Frequency>();
    empty_text_round_trip::<Transfer>();
    empty_text_round_trip::<FeedInfo>();
    empty_text_round_trip::<Level>();

    let stop = Stop::from_row(&Row::new().with("stop_id", "s1").with("stop_desc", ""));
    assert_eq!(Some(String::new()), stop.description);
    assert_eq!(Some(Some("")), stop.export().value("stop_desc"));
    assert_eq!(Some(None), stop.export().value("stop_code"));
}

#[test]
fn columns_follow_the_fields() {
    assert_eq!(
        &[
            "service_id",
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
            "sunday",
            "start_date",
            "end_date"
        ],
        Calendar::columns()
    );
    assert_eq!(&["service_id", "date", "exception_type"], CalendarDate::columns());
    assert_eq!(&["level_id", "level_index", "level_name"], Level::columns());
    assert_eq!(
        &[
            "shape_id",
            "shape_pt_lat",
            "shape_pt_lon",
            "shape_pt_sequence",
            "shape_dist_traveled"
        ],
        ShapePoint::columns()
    );
    let stop = Stop::default().export();
    assert_eq!(Stop::columns().to_vec(), stop.names().collect::<Vec<_>>());
    assert_eq!(14, Stop::columns().len());
}

#[test]
fn shape_ids_are_trimmed() {
    let mut shapes = Shapes::new();
    for id in &[" A", "A", "B ", "A "] {
        shapes.add(ShapePoint {
            id: Some((*id).to_owned()),
            ..ShapePoint::default()
        });
    }
    assert_eq!(vec!["A", "B"], shapes.shape_ids());
}

#[test]
fn validate_basic_feed() {
    let report = basic_feed().validate();
    assert_eq!(
        vec![
            Problem::InvalidValue {
                object_type: ObjectType::Route,
                row: 1,
                field: "route_type",
                value: "42".to_owned(),
            },
            Problem::DanglingReference {
                object_type: ObjectType::CalendarDate,
                row: 1,
                field: "service_id",
                id: "service2".to_owned(),
                target: ObjectType::Calendar,
            },
        ],
        report.problems
    );
    assert!(!report.is_valid());
}

#[test]
fn validate_required_fields() {
    let mut feed = Feed::default();
    feed.agencies.add(Agency {
        name: Some("A".to_owned()),
        url: Some("http://a.example".to_owned()),
        timezone: Some("Europe/Paris".to_owned()),
        ..Agency::default()
    });
    feed.agencies.add(Agency {
        id: Some("B".to_owned()),
        name: Some(" ".to_owned()),
        url: Some("http://b.example".to_owned()),
        timezone: Some("Europe/Paris".to_owned()),
        ..Agency::default()
    });
    feed.stops.add(Stop {
        id: Some("entrance".to_owned()),
        location_type: Some(LocationType::StationEntrance.into()),
        ..Stop::default()
    });
    feed.routes.add(Route {
        id: Some("r1".to_owned()),
        agency_id: Some("B".to_owned()),
        route_type: Some(RouteType::Bus.into()),
        ..Route::default()
    });

    let report = feed.validate();
    let missing: Vec<_> = report
        .iter()
        .filter_map(|p| match p {
            Problem::MissingRequiredField {
                object_type,
                row,
                field,
            } => Some((*object_type, *row, *field)),
            _ => None,
        })
        .collect();
    assert_eq!(
        vec![
            (ObjectType::Agency, 0, "agency_id"),
            (ObjectType::Agency, 1, "agency_name"),
            (ObjectType::Stop, 0, "stop_name"),
            (ObjectType::Stop, 0, "stop_lat"),
            (ObjectType::Stop, 0, "stop_lon"),
            (ObjectType::Stop, 0, "parent_station"),
            (ObjectType::Route, 0, "route_short_name"),
        ],
        missing
    );
    assert_eq!(7, report.len());
}

#[test]
fn validate_invalid_values() {
    let mut feed = Feed::default();
    let mut stop = stop("s1", None, None);
    stop.latitude = Some(Value::Valid(91.0));
    stop.wheelchair_boarding = Some(Availability::Unknown(7).into());
    feed.stops.add(stop);
    feed.routes.add(Route {
        id: Some("r1".to_owned()),
        short_name: Some("1".to_owned()),
        route_type: Some(RouteType::Bus.into()),
        color: Some("red".to_owned()),
        ..Route::default()
    });
    feed.calendar_dates.add(CalendarDate {
        service_id: Some("s".to_owned()),
        date: Some("20171301".to_owned()),
        exception_type: Some(Exception::Added.into()),
    });
    feed.frequencies.add(Frequency {
        trip_id: None,
        start_time: Some("25:61:00".to_owned()),
        end_time: Some("26:00:00".to_owned()),
        headway_secs: Some(Value::Valid(600)),
        ..Frequency::default()
    });

    let invalid: Vec<_> = feed
        .validate()
        .problems
        .into_iter()
        .filter_map(|p| match p {
            Problem::InvalidValue { field, value, .. } => Some((field, value)),
            _ => None,
        })
        .collect();
    assert_eq!(
        vec![
            ("stop_lat", "91".to_owned()),
            ("wheelchair_boarding", "7".to_owned()),
            ("route_color", "red".to_owned()),
            ("date", "20171301".to_owned()),
            ("start_time", "25:61:00".to_owned()),
        ],
        invalid
    );
}

#[test]
fn validate_duplicates() {
    let mut feed = Feed::default();
    feed.stops.add(stop("s1", None, None));
    feed.stops.add(stop("s2", None, None));
    feed.stops.add(stop(" s1", None, None));
    for _ in 0..2 {
        feed.calendar_dates.add(CalendarDate {
            service_id: Some("service1".to_owned()),
            date: Some("20170101".to_owned()),
            exception_type: Some(Exception::Added.into()),
        });
    }

    let report = feed.validate();
    assert_eq!(
        vec![
            Problem::DuplicateIdentifier {
                object_type: ObjectType::Stop,
                id: "s1".to_owned(),
                first_row: 0,
                duplicate_row: 2,
            },
            Problem::DuplicateIdentifier {
                object_type: ObjectType::CalendarDate,
                id: "service1, 20170101".to_owned(),
                first_row: 0,
                duplicate_row: 1,
            },
        ],
        report.problems
    );
}

#[test]
fn validate_references() {
    let mut feed = Feed::default();
    feed.stops.add(stop("station", Some(LocationType::StopArea), None));
    feed.stops.add(stop("platform", None, Some("station")));
    feed.stops.add(stop("child", None, Some("platform")));
    feed.stops.add(stop("orphan", None, Some("nowhere")));
    feed.stops.add(Stop {
        id: Some("boarding".to_owned()),
        location_type: Some(LocationType::BoardingArea.into()),
        parent_station: Some("platform".to_owned()),
        ..Stop::default()
    });
    feed.trips.add(Trip {
        route_id: Some("r1".to_owned()),
        service_id: Some("s1".to_owned()),
        id: Some("t1".to_owned()),
        ..Trip::default()
    });

    let report = feed.validate();
    assert_eq!(
        vec![
            Problem::InvalidParentStation {
                row: 2,
                parent_station: "platform".to_owned(),
                found: 0,
            },
            Problem::DanglingReference {
                object_type: ObjectType::Stop,
                row: 3,
                field: "parent_station",
                id: "nowhere".to_owned(),
                target: ObjectType::Stop,
            },
            Problem::DanglingReference {
                object_type: ObjectType::Trip,
                row: 0,
                field: "route_id",
                id: "r1".to_owned(),
                target: ObjectType::Route,
            },
            Problem::DanglingReference {
                object_type: ObjectType::Trip,
                row: 0,
                field: "service_id",
                id: "s1".to_owned(),
                target: ObjectType::Calendar,
            },
        ],
        report.problems
    );
}

#[test]
fn display_report() {
    let mut feed = Feed::default();
    assert_eq!("feed valid", feed.validate().to_string());

    feed.levels.add(Level {
        id: Some("L0".to_owned()),
        ..Level::default()
    });
    assert_eq!(
        "feed invalid, here are 1 problems:\n  Level at row 0: missing required field 'level_index'",
        feed.validate().to_string()
    );
}

#[test]
fn serialize_report() {
    let mut feed = Feed::default();
    feed.levels.add(Level::default());
    let json = serde_json::to_value(&feed.validate()).unwrap();
    assert_eq!(
        serde_json::json!({
            "problems": [
                {"kind": "MissingRequiredField", "object_type": "Level", "row": 0, "field": "level_id"},
                {"kind": "MissingRequiredField", "object_type": "Level", "row": 0, "field": "level_index"}
            ]
        }),
        json
    );
}
