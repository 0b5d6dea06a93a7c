// src/store.rs
// In-memory record store for one run. Nothing here outlives the process.

use chrono::{DateTime, Local};

use crate::specs::{detail::JobDetail, results::ListingStub};

/// Captured once when a run starts. Every record of the run shares its date/time.
#[derive(Clone, Debug)]
pub struct RunContext {
    started_at: DateTime<Local>,
}

impl RunContext {
    pub fn new(started_at: DateTime<Local>) -> Self {
        Self { started_at }
    }

    pub fn now() -> Self {
        Self::new(Local::now())
    }

    pub fn started_at(&self) -> &DateTime<Local> {
        &self.started_at
    }

    /// `dd/mm/YYYY`
    pub fn scrape_date(&self) -> String {
        self.started_at.format("%d/%m/%Y").to_string()
    }

    /// `HH:MM:SS`
    pub fn scrape_time(&self) -> String {
        self.started_at.format("%H:%M:%S").to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobRecord {
    pub id: u32,
    pub scrape_date: String,
    pub scrape_time: String,
    pub posted: String,
    pub detail: JobDetail,
    pub url: String,
}

/// Records keyed by id, in discovery order. Ids are 1..=len with no gaps,
/// so the id doubles as the position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<JobRecord>,
}

impl ResultSet {
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn get(&self, id: u32) -> Option<&JobRecord> {
        let ix = usize::try_from(id).ok()?.checked_sub(1)?;
        self.records.get(ix)
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a JobRecord;
    type IntoIter = std::slice::Iter<'a, JobRecord>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

/// Merges listing stubs and parsed details into records, handing out ids.
pub struct Aggregator<'a> {
    ctx: &'a RunContext,
    set: ResultSet,
    next_id: u32,
}

impl<'a> Aggregator<'a> {
    pub fn new(ctx: &'a RunContext) -> Self {
        Self { ctx, set: ResultSet::default(), next_id: 1 }
    }

    /// Store one record; returns the id it got.
    /// Callers must push in discovery order.
    pub fn push(&mut self, stub: ListingStub, detail: JobDetail) -> u32 {
        let id = self.next_id;
        self.set.records.push(JobRecord {
            id,
            scrape_date: self.ctx.scrape_date(),
            scrape_time: self.ctx.scrape_time(),
            posted: stub.posted,
            detail,
            url: stub.url,
        });
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize { self.set.len() }
    pub fn is_empty(&self) -> bool { self.set.is_empty() }

    pub fn finish(self) -> ResultSet {
        self.set
    }
}
