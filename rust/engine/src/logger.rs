use std::collections::BTreeMap;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::RoundState;
use crate::hand::TexasHandType;
use crate::player::PlayerId;

/// One scored showdown round, serialized as a JSON line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Seed of the deck the game was dealt from
    pub seed: Option<u64>,
    pub round_number: u32,
    pub dealer: PlayerId,
    pub cards_to_play: u8,
    /// Community cards shared by every player
    pub community: Vec<Card>,
    pub plays: BTreeMap<PlayerId, Vec<Card>>,
    pub categories: BTreeMap<PlayerId, TexasHandType>,
    pub points: BTreeMap<PlayerId, u32>,
    pub winner: Option<PlayerId>,
    pub loser: Option<PlayerId>,
    /// Timestamp when the round was archived (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_round(round_id: String, seed: Option<u64>, community: &[Card], round: &RoundState) -> Self {
        Self {
            round_id,
            seed,
            round_number: round.round_number,
            dealer: round.dealer.clone(),
            cards_to_play: round.cards_to_play,
            community: community.to_vec(),
            plays: round.plays.clone(),
            categories: round
                .results
                .iter()
                .map(|(id, r)| (id.clone(), r.hand_type))
                .collect(),
            points: round.points.clone(),
            winner: round.winner.clone(),
            loser: round.loser.clone(),
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that only hands out ids; writes are dropped.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
