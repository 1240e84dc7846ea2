//! Serves recorded interactions back in recording order.

use std::collections::{BTreeMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Pending interactions per `(port, method)`, each queue ordered by `seq`.
#[derive(Debug)]
pub struct CassetteReplayer {
    pending: BTreeMap<(String, String), VecDeque<Interaction>>,
    served: BTreeMap<(String, String), usize>,
}

impl CassetteReplayer {
    /// Index a loaded cassette for replay.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut sorted = cassette.interactions.clone();
        sorted.sort_by_key(|i| i.seq);

        let mut pending: BTreeMap<(String, String), VecDeque<Interaction>> = BTreeMap::new();
        for interaction in sorted {
            pending
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction);
        }
        Self { pending, served: BTreeMap::new() }
    }

    /// Take the next interaction recorded for `port`/`method`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the recorded pairs if `port`/`method` never
    /// occurs in the cassette, or the served count if its queue is used up.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Result<Interaction, String> {
        let key = (port.to_string(), method.to_string());
        let Some(queue) = self.pending.get_mut(&key) else {
            let recorded: Vec<String> =
                self.pending.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            return Err(format!(
                "Cassette exhausted: nothing recorded for {port}::{method}; recorded: [{}]",
                recorded.join(", ")
            ));
        };

        let served = self.served.entry(key).or_insert(0);
        match queue.pop_front() {
            Some(interaction) => {
                *served += 1;
                Ok(interaction)
            }
            None => Err(format!(
                "Cassette exhausted: all {served} recorded {port}::{method} calls already replayed"
            )),
        }
    }
}
