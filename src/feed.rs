use crate::collection::Collection;
use crate::{objects::*, Row};
use chrono::prelude::NaiveDate;
use chrono::Duration;
use std::collections::HashSet;
use std::convert::TryFrom;

/// Every collection of a GTFS feed
///
/// Built by [crate::FeedReader] from a [crate::RowSource], or filled by hand.
/// Nothing is checked while loading: call [Feed::validate] to list the problems of the feed.
#[derive(Debug, Default, Clone)]
pub struct Feed {
    /// Time needed to read and build the collections in milliseconds
    pub read_duration: i64,
    pub agencies: Collection<Agency>,
    pub stops: Collection<Stop>,
    pub routes: Collection<Route>,
    pub trips: Collection<Trip>,
    pub stop_times: Collection<StopTime>,
    pub calendar: Collection<Calendar>,
    pub calendar_dates: Collection<CalendarDate>,
    pub fare_attributes: Collection<FareAttribute>,
    pub fare_rules: Collection<FareRule>,
    pub shapes: Collection<ShapePoint>,
    pub frequencies: Collection<Frequency>,
    pub transfers: Collection<Transfer>,
    pub feed_info: Collection<FeedInfo>,
    pub levels: Collection<Level>,
}

fn push_table<T: Record>(tables: &mut Vec<(&'static str, Vec<Row>)>, c: &Collection<T>) {
    if !c.is_empty() {
        tables.push((T::FILE_NAME, c.export_all()));
    }
}

impl Feed {
    /// Prints on stdout some basic statistics about the feed (numbers of elements for each object). Mostly to be sure that everything was read
    pub fn print_stats(&self) {
        println!("GTFS data:");
        println!("  Read in {} ms", self.read_duration);
        println!("  Agencies: {}", self.agencies.len());
        println!("  Stops: {}", self.stops.len());
        println!("  Routes: {}", self.routes.len());
        println!("  Trips: {}", self.trips.len());
        println!("  Stop times: {}", self.stop_times.len());
        println!("  Calendar: {}", self.calendar.len());
        println!("  Calendar dates: {}", self.calendar_dates.len());
        println!("  Shapes: {}", self.shapes.shape_ids().len());
        println!("  Fare attributes: {}", self.fare_attributes.len());
        println!("  Fare rules: {}", self.fare_rules.len());
        println!("  Frequencies: {}", self.frequencies.len());
        println!("  Transfers: {}", self.transfers.len());
        println!("  Feed info: {}", self.feed_info.len());
        println!("  Levels: {}", self.levels.len());
    }

    /// The exported rows of every non empty collection, with the name of its file
    ///
    /// Files come in a fixed order, rows in insertion order.
    pub fn export_all(&self) -> Vec<(&'static str, Vec<Row>)> {
        let mut tables = Vec::new();
        push_table(&mut tables, &self.agencies);
        push_table(&mut tables, &self.stops);
        push_table(&mut tables, &self.routes);
        push_table(&mut tables, &self.trips);
        push_table(&mut tables, &self.stop_times);
        push_table(&mut tables, &self.calendar);
        push_table(&mut tables, &self.calendar_dates);
        push_table(&mut tables, &self.fare_attributes);
        push_table(&mut tables, &self.fare_rules);
        push_table(&mut tables, &self.shapes);
        push_table(&mut tables, &self.frequencies);
        push_table(&mut tables, &self.transfers);
        push_table(&mut tables, &self.feed_info);
        push_table(&mut tables, &self.levels);
        tables
    }

    /// Days (as offsets from `start_date`) on which the service runs, sorted
    ///
    /// Combines the [Calendar] of the service with its [CalendarDate] exceptions.
    /// Malformed dates are ignored, and so are days more than `u16::MAX` days after `start_date`.
    pub fn trip_days(&self, service_id: &str, start_date: NaiveDate) -> Vec<u16> {
        let mut result = Vec::new();

        // Handle services given by specific days and exceptions
        let mut removed_days = HashSet::new();
        for extra_day in self.calendar_dates.for_service(service_id) {
            let date = match extra_day.parsed_date() {
                Some(date) => date,
                None => continue,
            };
            let offset = match u16::try_from(date.signed_duration_since(start_date).num_days()) {
                Ok(offset) => offset,
                Err(_) => continue,
            };
            match extra_day.exception_type.valid() {
                Some(Exception::Added) => result.push(offset),
                Some(Exception::Deleted) => {
                    removed_days.insert(offset);
                }
                _ => (),
            }
        }

        if let Some(calendar) = self.calendar.get_by_id(service_id) {
            if let (Some(start), Some(end)) = (calendar.start(), calendar.end()) {
                let total_days = end.signed_duration_since(start_date).num_days();
                if total_days >= 0 {
                    let last_offset = u16::try_from(total_days).unwrap_or(u16::MAX);
                    for offset in 0..=last_offset {
                        let current_date = start_date + Duration::days(i64::from(offset));

                        if start <= current_date
                            && end >= current_date
                            && calendar.valid_weekday(current_date)
                            && !removed_days.contains(&offset)
                        {
                            result.push(offset);
                        }
                    }
                }
            }
        }

        result.sort_unstable();
        result.dedup();
        result
    }
}
