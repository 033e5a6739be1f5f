//! Protokoll ausgeführter Edit-Commands.
//!
//! Hält die jüngste Befehlsfolge für Diagnosezwecke vor; beim
//! Überlauf fällt die ältere Hälfte weg.

use super::EditCommand;

/// Chronik der zuletzt ausgeführten Commands.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<EditCommand>,
}

impl CommandLog {
    /// Obergrenze des Protokolls; beim Erreichen wird halbiert.
    const CAPACITY: usize = 1024;

    /// Erstellt ein leeres Protokoll.
    pub fn new() -> Self {
        Self::default()
    }

    /// Protokolliert einen ausgeführten Command.
    pub fn record(&mut self, command: EditCommand) {
        if self.entries.len() >= Self::CAPACITY {
            self.entries.drain(..Self::CAPACITY / 2);
        }
        self.entries.push(command);
    }

    /// Der zuletzt ausgeführte Command.
    pub fn last(&self) -> Option<&EditCommand> {
        self.entries.last()
    }

    /// Anzahl der protokollierten Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn noch nichts protokolliert wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle Einträge in Ausführungsreihenfolge.
    pub fn entries(&self) -> &[EditCommand] {
        &self.entries
    }
}
