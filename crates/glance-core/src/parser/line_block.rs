//! Line-block grammar: blank-line separated `key: value` groups.
//!
//! Each window is a run of lines carrying the five keys `procName`,
//! `procID`, `name`, `position`, and `size`. A record is emitted only once
//! all five keys were seen for a block; a partial block at a separator or
//! at end of input is dropped, never zero-filled.

use std::collections::HashMap;

use crate::parser::{synthesize_id, tokens};
use crate::windows::types::{WindowBounds, WindowRecord};

#[derive(Default)]
struct Block {
    app_name: Option<String>,
    pid: Option<u32>,
    title: Option<String>,
    position: Option<(i32, i32)>,
    size: Option<(i32, i32)>,
}

impl Block {
    fn into_record(self, ordinals: &mut HashMap<u32, u32>) -> Option<WindowRecord> {
        let app_name = self.app_name?;
        let pid = self.pid?;
        let title = self.title?;
        let (x, y) = self.position?;
        let (width, height) = self.size?;
        Some(WindowRecord {
            id: synthesize_id(pid, ordinals),
            title,
            app_name,
            pid,
            bounds: WindowBounds::new(x, y, width, height),
        })
    }
}

pub fn parse(raw: &str) -> Vec<WindowRecord> {
    let mut records = Vec::new();
    let mut ordinals = HashMap::new();
    let mut block = Block::default();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            if let Some(record) = std::mem::take(&mut block).into_record(&mut ordinals) {
                records.push(record);
            }
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "procName" => block.app_name = Some(value.to_string()),
            "procID" => {
                block.pid = tokens::read_int(value).and_then(|n| u32::try_from(n).ok());
            }
            "name" => block.title = Some(value.to_string()),
            "position" => block.position = tokens::read_pair(value),
            "size" => block.size = tokens::read_pair(value),
            _ => {}
        }
    }

    if let Some(record) = block.into_record(&mut ordinals) {
        records.push(record);
    }

    records
}
