//! War Room session
//!
//! The host-side owner of one operator's case record and gate checklist.
//! The engine itself keeps no state; a session holds the inputs and the last
//! assessment, and reruns the pure pipeline on every change once an analysis
//! exists.
//!
//! Lifecycle:
//! 1. `new` opens a session on the default case, nothing analyzed
//! 2. `analyze` resets the checklist and assesses the current case
//! 3. edits (`set_input`, `update_input`, `toggle_gate`, `set_gate`)
//!    refresh the assessment in place
//! 4. `clear` drops the assessment and resets the checklist

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::case::{CaseInput, CaseResult};
use crate::gate::{GateKey, GateState};
use crate::observability::{log_event_with_fields, Event};
use crate::pipeline::{assess, Assessment};
use crate::report::{render, why_text};
use crate::scoring::Verdict;

pub struct WarRoomSession {
    id: Uuid,
    opened_at: DateTime<Utc>,
    input: CaseInput,
    gate: GateState,
    assessment: Option<Assessment>,
}

impl Default for WarRoomSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WarRoomSession {
    /// Open a session on the default case.
    pub fn new() -> Self {
        Self::with_input(CaseInput::default())
    }

    /// Open a session on the given case.
    pub fn with_input(input: CaseInput) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            input,
            gate: GateState::cleared(),
            assessment: None,
        };
        let opened_at = session.opened_at.to_rfc3339();
        log_event_with_fields(
            Event::SessionOpened,
            &[("session", &session.id_string()), ("opened_at", &opened_at)],
        );
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn input(&self) -> &CaseInput {
        &self.input
    }

    pub fn gate(&self) -> &GateState {
        &self.gate
    }

    /// Last assessment, if the case has been analyzed.
    pub fn assessment(&self) -> Option<&Assessment> {
        self.assessment.as_ref()
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.assessment.as_ref().map(|a| a.final_verdict)
    }

    /// Reset the checklist and assess the current case.
    pub fn analyze(&mut self) -> &Assessment {
        self.gate = GateState::cleared();
        self.run()
    }

    /// Recompute if an analysis exists. Returns the fresh assessment.
    pub fn refresh(&mut self) -> Option<&Assessment> {
        if self.assessment.is_none() {
            return None;
        }
        Some(self.run())
    }

    /// Replace the case record.
    pub fn set_input(&mut self, input: CaseInput) -> Option<&Assessment> {
        self.input = input;
        self.refresh()
    }

    /// Validate a JSON case record and make it current.
    ///
    /// On rejection the current case is left untouched.
    pub fn load_case(&mut self, record: &Value) -> CaseResult<Option<&Assessment>> {
        match CaseInput::from_json(record) {
            Ok(input) => {
                log_event_with_fields(Event::CaseAccepted, &[("session", &self.id_string())]);
                Ok(self.set_input(input))
            }
            Err(err) => {
                log_event_with_fields(
                    Event::CaseRejected,
                    &[
                        ("session", &self.id_string()),
                        ("code", err.code()),
                        ("message", &err.to_string()),
                    ],
                );
                Err(err)
            }
        }
    }

    /// Edit the case record in place.
    pub fn update_input<F>(&mut self, edit: F) -> Option<&Assessment>
    where
        F: FnOnce(&mut CaseInput),
    {
        edit(&mut self.input);
        self.refresh()
    }

    /// Flip one checklist item; returns its new value.
    pub fn toggle_gate(&mut self, key: GateKey) -> bool {
        let done = self.gate.toggle(key);
        self.log_gate(key, done);
        self.refresh();
        done
    }

    pub fn set_gate(&mut self, key: GateKey, done: bool) -> Option<&Assessment> {
        self.gate.set(key, done);
        self.log_gate(key, done);
        self.refresh()
    }

    /// Replace the whole checklist.
    pub fn set_gates(&mut self, state: GateState) -> Option<&Assessment> {
        for key in GateKey::ALL {
            if self.gate.is_done(key) != state.is_done(key) {
                self.log_gate(key, state.is_done(key));
            }
        }
        self.gate = state;
        self.refresh()
    }

    /// Drop the analysis and reset the checklist. The case record is kept.
    pub fn clear(&mut self) {
        self.assessment = None;
        self.gate = GateState::cleared();
        log_event_with_fields(Event::SessionCleared, &[("session", &self.id_string())]);
    }

    /// Report text for the current assessment.
    pub fn report(&self) -> Option<String> {
        let assessment = self.assessment.as_ref()?;
        let text = render(&self.input, assessment, &self.gate);
        log_event_with_fields(Event::ReportRendered, &[("session", &self.id_string())]);
        Some(text)
    }

    /// Trigger trace for the current assessment.
    pub fn why(&self, limit: usize) -> Option<String> {
        self.assessment
            .as_ref()
            .map(|a| why_text(&a.triggers, limit))
    }

    fn run(&mut self) -> &Assessment {
        let assessment = assess(&self.input, &self.gate);
        let session = self.id_string();

        let top = assessment
            .top_cause()
            .map(|c| c.as_str())
            .unwrap_or("NONE");
        log_event_with_fields(
            Event::AssessmentComplete,
            &[
                ("session", &session),
                ("top_cause", top),
                ("risk", assessment.risk.as_str()),
                ("triggers", &assessment.triggers.len().to_string()),
            ],
        );
        log_event_with_fields(
            Event::VerdictResolved,
            &[
                ("session", &session),
                ("base", assessment.base_verdict.as_str()),
                ("verdict", assessment.final_verdict.as_str()),
                ("pending", &assessment.pending_gates.len().to_string()),
            ],
        );

        self.assessment.insert(assessment)
    }

    fn log_gate(&self, key: GateKey, done: bool) {
        log_event_with_fields(
            Event::GateToggled,
            &[
                ("session", &self.id_string()),
                ("item", key.as_str()),
                ("done", if done { "true" } else { "false" }),
            ],
        );
    }

    fn id_string(&self) -> String {
        self.id.to_string()
    }
}
