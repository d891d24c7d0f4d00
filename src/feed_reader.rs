use crate::collection::Collection;
use crate::objects::Record;
use crate::{Error, Feed, RowSource};
use chrono::Utc;
use log::debug;

/// Allows to parameterize how the feed is built from its rows
///
/// ```
/// use gtfs_records::{CsvTables, FeedReader};
/// let tables = CsvTables::default()
///     .with("agency.txt", "agency_name,agency_url,agency_timezone\nBIBUS,http://www.bibus.fr,Europe/Paris\n")
///     .with("stops.txt", "stop_id,stop_name,stop_lat,stop_lon\nstop1,Stop Area,48.79,2.44\n")
///     .with("routes.txt", "route_id,route_short_name,route_type\n1,1,3\n")
///     .with("trips.txt", "route_id,service_id,trip_id\n1,service1,trip1\n");
/// let feed = FeedReader::default().without_stop_times().read(&tables)?;
/// assert_eq!(0, feed.stop_times.len());
/// assert!(feed.stops.exists_by_id("stop1"));
/// # Ok::<(), gtfs_records::Error>(())
/// ```
#[derive(Derivative, Debug, Clone)]
#[derivative(Default)]
pub struct FeedReader {
    /// [crate::StopTime] are very large and not always needed. This allows to skip reading them
    #[derivative(Default(value = "true"))]
    pub read_stop_times: bool,
    /// [crate::ShapePoint] can also be skipped
    #[derivative(Default(value = "true"))]
    pub read_shapes: bool,
}

impl FeedReader {
    /// Configures the reader to not read the stop times
    ///
    /// This can be useful to save time and memory with large datasets when the timetable are not needed
    /// Returns Self and can be chained
    pub fn without_stop_times(&mut self) -> &mut Self {
        self.read_stop_times = false;
        self
    }

    /// Configures the reader to not read the shapes. Can be chained
    pub fn without_shapes(&mut self) -> &mut Self {
        self.read_shapes = false;
        self
    }

    /// Should the stop times be read. Can be chained
    pub fn read_stop_times(&mut self, read_stop_times: bool) -> &mut Self {
        self.read_stop_times = read_stop_times;
        self
    }

    /// Builds every collection from the rows of the source
    ///
    /// agency.txt, stops.txt, routes.txt, trips.txt and stop_times.txt (when read) must be present;
    /// the other files are optional and give an empty collection when absent.
    pub fn read<S: RowSource>(&self, source: &S) -> Result<Feed, Error> {
        let now = Utc::now();
        let mut feed = Feed {
            agencies: self.read_collection(source, true)?,
            stops: self.read_collection(source, true)?,
            routes: self.read_collection(source, true)?,
            trips: self.read_collection(source, true)?,
            calendar: self.read_collection(source, false)?,
            calendar_dates: self.read_collection(source, false)?,
            fare_attributes: self.read_collection(source, false)?,
            fare_rules: self.read_collection(source, false)?,
            frequencies: self.read_collection(source, false)?,
            transfers: self.read_collection(source, false)?,
            feed_info: self.read_collection(source, false)?,
            levels: self.read_collection(source, false)?,
            ..Feed::default()
        };
        if self.read_stop_times {
            feed.stop_times = self.read_collection(source, true)?;
        }
        if self.read_shapes {
            feed.shapes = self.read_collection(source, false)?;
        }
        feed.read_duration = Utc::now().signed_duration_since(now).num_milliseconds();
        Ok(feed)
    }

    fn read_collection<T: Record, S: RowSource>(
        &self,
        source: &S,
        mandatory: bool,
    ) -> Result<Collection<T>, Error> {
        let rows = match source.rows(T::FILE_NAME)? {
            Some(rows) => rows,
            None if mandatory => return Err(Error::MissingFile(T::FILE_NAME.to_owned())),
            None => {
                debug!("{} is not present", T::FILE_NAME);
                return Ok(Collection::default());
            }
        };

        let collection = Collection::from_rows(&rows);
        debug!("{}: {} records", T::FILE_NAME, collection.len());
        Ok(collection)
    }
}
