use super::{
    SuggestionEngine,
    pattern::{Anchor, MatchPattern},
    shape::Suggestion,
};
use crate::{
    candidate::{Candidate, CandidateGroup, CandidateRecord, Candidates},
    config::MatchMode,
    error::InternalError,
    model::RecordModel,
    value::Value,
};
use tracing::debug;

impl SuggestionEngine<'_> {
    ///
    /// filter_array
    ///
    /// Walk an inline source in order, emitting matches until `limit` leaf
    /// results exist. A zero limit is treated as no limit.
    ///
    pub(super) fn filter_array(
        &self,
        query: &str,
        candidates: &Candidates,
        model: Option<&'static RecordModel>,
        limit: Option<usize>,
    ) -> Result<Vec<Suggestion>, InternalError> {
        let pattern = self.array_pattern(query, model)?;
        let limit = limit.filter(|l| *l > 0);

        let results = self.walk(candidates, &pattern, limit);
        debug!(
            query,
            results = results.len(),
            mode = ?self.config.match_mode,
            "inline source filtered"
        );

        Ok(results)
    }

    // The first search field's kind picks the anchor. Without any search
    // field a non-empty query is a prefix match.
    fn array_pattern(
        &self,
        query: &str,
        model: Option<&'static RecordModel>,
    ) -> Result<MatchPattern, InternalError> {
        let specs = match (self.config.source_field.as_deref(), model) {
            (Some(fields), _) => fields.to_vec(),
            (None, Some(model)) => self.scaffold(model),
            (None, None) => Vec::new(),
        };

        let anchor = specs
            .first()
            .map_or(Anchor::Start, |spec| Anchor::for_filter(spec.filter.as_ref()));

        MatchPattern::build(query, anchor)
    }

    fn walk(
        &self,
        candidates: &Candidates,
        pattern: &MatchPattern,
        limit: Option<usize>,
    ) -> Vec<Suggestion> {
        let shaper = self.shaper();
        let mut results = Vec::new();
        let mut count = 0;

        for candidate in candidates {
            if limit.is_some_and(|limit| count >= limit) {
                break;
            }

            match candidate {
                Candidate::Group(CandidateGroup { label, children }) => {
                    let mut matched = self.walk(children, pattern, limit);
                    if let Some(limit) = limit {
                        keep_tail(&mut matched, limit - count);
                    }
                    if matched.is_empty() {
                        continue;
                    }

                    count += leaf_count(&matched);
                    results.push(Suggestion::Group(
                        shaper.result_group_to_map(label.clone(), matched),
                    ));
                }
                Candidate::Record(record) => {
                    let Some(text) = self.record_text(record) else {
                        continue;
                    };
                    if !self.admits(pattern, &text) {
                        continue;
                    }

                    let key = record
                        .get(&self.config.val_field)
                        .filter(|key| !key.is_null())
                        .cloned()
                        .unwrap_or_else(|| Value::from(count));

                    results.push(shaper.result_to_map(key, text).into());
                    count += 1;
                }
                Candidate::Scalar { key, value } => {
                    let Some(text) = value.as_text().or_else(|| key.as_text()) else {
                        continue;
                    };
                    if !self.admits(pattern, text) {
                        continue;
                    }

                    results.push(shaper.result_to_map(key.clone(), text).into());
                    count += 1;
                }
            }
        }

        results
    }

    // Missing or null display fields read as empty text; any other
    // non-text value makes the record undisplayable.
    fn record_text(&self, record: &CandidateRecord) -> Option<String> {
        match record.get(&self.config.ref_field) {
            None | Some(Value::Null) => Some(String::new()),
            Some(Value::Text(text)) => Some(text.clone()),
            Some(_) => None,
        }
    }

    fn admits(&self, pattern: &MatchPattern, text: &str) -> bool {
        match self.config.match_mode {
            MatchMode::Strict => pattern.is_match(text),
            MatchMode::Legacy => true,
        }
    }
}

/// Number of selectable records under `results`, groups excluded.
pub(super) fn leaf_count(results: &[Suggestion]) -> usize {
    results
        .iter()
        .map(|entry| match entry {
            Suggestion::Record(_) => 1,
            Suggestion::Group(group) => leaf_count(&group.children),
        })
        .sum()
}

// A group is filtered under the full limit, then trimmed to what is left of
// it. Drop records from the front until at most `budget` remain. Groups emptied
// by the trim are removed with their contents.
fn keep_tail(results: &mut Vec<Suggestion>, budget: usize) {
    let mut excess = leaf_count(results).saturating_sub(budget);

    while excess > 0 && !results.is_empty() {
        let front = match &mut results[0] {
            Suggestion::Record(_) => 1,
            Suggestion::Group(group) => {
                let size = leaf_count(&group.children);
                if size > excess {
                    let keep = size - excess;
                    keep_tail(&mut group.children, keep);
                    excess = 0;
                    continue;
                }
                size
            }
        };

        results.remove(0);
        excess -= front;
    }
}
