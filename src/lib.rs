/*! The [General Transit Feed Specification](https://gtfs.org/) (GTFS) is a commonly used model to represent public transit data.

This crate models every GTFS file as a collection of typed records:
each line of a file is a [Record] holding its fields as `Option`s, and each file is a [Collection]
that keeps the records in insertion order and can look them up by identifier.

Records are built from and exported to [Row]s, ordered lists of named values, through their serde derive.
Text that cannot be read as the type of its column is kept as a [Value::Invalid] and exported unchanged.
Rows come from any [RowSource] (csv text held in memory with [CsvTables], or already parsed rows),
and [FeedReader] builds a whole [Feed] out of them.

Nothing is checked while building the records: a feed can hold dangling references or repeated identifiers.
[Feed::validate] lists all the data-quality problems in a [ValidationReport].

```
use gtfs_records::{CsvTables, FeedReader};
let tables = CsvTables::default()
    .with("agency.txt", "agency_id,agency_name,agency_url,agency_timezone\n1,BIBUS,http://www.bibus.fr,Europe/Paris\n")
    .with("stops.txt", "stop_id,stop_name,stop_lat,stop_lon\nstop1,Stop Area,48.79,2.44\n")
    .with("routes.txt", "route_id,agency_id,route_short_name,route_type\n1,1,1,3\n")
    .with("trips.txt", "route_id,service_id,trip_id\n1,service1,trip1\n")
    .with("calendar_dates.txt", "service_id,date,exception_type\nservice1,20170101,1\n")
    .with("stop_times.txt", "trip_id,arrival_time,departure_time,stop_id,stop_sequence\ntrip1,14:00:00,14:00:00,stop1,1\n");
let feed = FeedReader::default().read(&tables)?;
assert!(feed.stops.exists_by_id("stop1"));
assert!(feed.validate().is_valid());
# Ok::<(), gtfs_records::Error>(())
```
*/

#[macro_use]
extern crate derivative;
#[macro_use]
extern crate serde_derive;

mod collection;
mod csv_rows;
mod enums;
pub mod error;
mod feed;
mod feed_reader;
mod objects;
mod parsing;
mod row;
mod row_serde;
mod row_source;
mod validation;
mod value;

#[cfg(test)]
mod tests;

pub use collection::*;
pub use csv_rows::{read_rows, write_rows};
pub use error::Error;
pub use feed::Feed;
pub use feed_reader::FeedReader;
pub use objects::*;
pub use row::Row;
pub use row_source::{CsvTables, RowSource};
pub use validation::{Problem, ValidationReport};
pub use value::Text;
