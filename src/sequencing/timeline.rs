/*
Timelines
=========

A timeline is the ordered list of notes one voice plays. Two operations
matter:

  repeat(n)     Expand the pattern into n copies, the i-th copy shifted by
                i × span, where span = the latest note end. Order inside
                each copy is preserved and copies are concatenated in shift
                order. No re-sorting happens anywhere.

  active_at(t)  Which note (if any) sounds at absolute time t. The scan
                returns the FIRST stored note whose span covers t.

First-match matters: notes are allowed to overlap, and when they do, the one
stored earlier wins and the later one is silently skipped for that instant.
Switching this to last-match or loudest-match changes audible output, so the
policy is pinned down by tests rather than left as an accident of the loop.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::note::Note;

/// Ordered sequence of notes for one voice.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    notes: Vec<Note>,
}

impl Timeline {
    pub fn new() -> Self {
        Self { notes: Vec::new() }
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Append a note with default velocity. Builder-style, used when
    /// composing patterns by hand.
    pub fn note(mut self, frequency: f64, start: f64, duration: f64) -> Self {
        self.notes.push(Note::new(frequency, start, duration));
        self
    }

    /// Append a note with an explicit velocity in [0, 1].
    pub fn note_vel(mut self, frequency: f64, start: f64, duration: f64, velocity: f64) -> Self {
        self.notes
            .push(Note::new(frequency, start, duration).with_velocity(velocity));
        self
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Total span of the pattern in seconds: the latest note end, or 0 for
    /// an empty timeline. This is the period used by `repeat`.
    pub fn span(&self) -> f64 {
        self.notes.iter().map(Note::end).fold(0.0, f64::max)
    }

    /// Expand the pattern into `n` repetitions, each shifted by one span.
    ///
    /// `repeat(1)` is the identity; `repeat(0)` empties the timeline.
    pub fn repeat(self, n: usize) -> Self {
        let period = self.span();
        let mut expanded = Vec::with_capacity(self.notes.len() * n);
        for i in 0..n {
            let offset = i as f64 * period;
            expanded.extend(self.notes.iter().map(|note| note.shifted(offset)));
        }
        Self { notes: expanded }
    }

    /// First note in stored order whose span covers `t`, or `None` if the
    /// voice is silent at `t`.
    pub fn active_at(&self, t: f64) -> Option<&Note> {
        self.notes.iter().find(|note| note.covers(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_on_the_floor() -> Timeline {
        Timeline::new()
            .note(440.0, 0.0, 1.0)
            .note(880.0, 1.0, 1.0)
            .note(440.0, 2.0, 1.0)
            .note(880.0, 3.0, 1.0)
    }

    #[test]
    fn active_at_finds_covering_note() {
        let tl = four_on_the_floor();
        assert_eq!(tl.active_at(0.5).unwrap().frequency, 440.0);
        assert_eq!(tl.active_at(1.0).unwrap().frequency, 880.0);
        assert_eq!(tl.active_at(3.999).unwrap().frequency, 880.0);
    }

    #[test]
    fn no_note_outside_spans() {
        let tl = Timeline::new().note(440.0, 1.0, 0.5);
        assert!(tl.active_at(0.0).is_none());
        assert!(tl.active_at(0.99).is_none());
        assert!(tl.active_at(1.5).is_none());
        assert!(tl.active_at(100.0).is_none());
    }

    #[test]
    fn overlapping_notes_first_match_wins() {
        // N2 starts while N1 is still sounding; inside both spans the
        // earlier-stored note wins.
        let tl = Timeline::new()
            .note(440.0, 0.0, 2.0)
            .note(660.0, 1.0, 2.0);
        assert_eq!(tl.active_at(1.5).unwrap().frequency, 440.0);
        // after N1 ends, N2 takes over
        assert_eq!(tl.active_at(2.5).unwrap().frequency, 660.0);
    }

    #[test]
    fn span_is_latest_end() {
        let tl = Timeline::new()
            .note(100.0, 0.0, 4.0)
            .note(200.0, 1.0, 1.0);
        assert_eq!(tl.span(), 4.0);
    }

    #[test]
    fn repeat_shifts_by_whole_spans() {
        let tl = four_on_the_floor().repeat(3);
        assert_eq!(tl.notes().len(), 12);

        // each repetition is the original shifted by k * 4.0, nothing
        // reordered
        let original = four_on_the_floor();
        for k in 0..3 {
            for (i, note) in original.notes().iter().enumerate() {
                let repeated = &tl.notes()[k * 4 + i];
                assert_eq!(repeated.frequency, note.frequency);
                assert_eq!(repeated.start, note.start + k as f64 * 4.0);
                assert_eq!(repeated.duration, note.duration);
            }
        }
    }

    #[test]
    fn repeat_match_equals_shifted_match() {
        let tl = four_on_the_floor();
        let repeated = tl.clone().repeat(4);
        for k in 0..4u32 {
            let t = 1.25;
            let base = tl.active_at(t).unwrap();
            let hit = repeated.active_at(t + k as f64 * 4.0).unwrap();
            assert_eq!(hit.frequency, base.frequency);
            assert_eq!(hit.start, base.start + k as f64 * 4.0);
            assert_eq!(hit.duration, base.duration);
        }
    }

    #[test]
    fn repeat_preserves_overlap_policy() {
        let tl = Timeline::new()
            .note(440.0, 0.0, 2.0)
            .note(660.0, 1.0, 1.0)
            .repeat(2);
        // span is 2.0; inside the second repetition the overlap still
        // resolves to the earlier-stored note
        assert_eq!(tl.active_at(3.5).unwrap().frequency, 440.0);
    }

    #[test]
    fn repeat_zero_empties() {
        assert!(four_on_the_floor().repeat(0).is_empty());
    }

    #[test]
    fn empty_timeline_is_silent() {
        assert!(Timeline::new().active_at(0.0).is_none());
        assert_eq!(Timeline::new().span(), 0.0);
    }
}
