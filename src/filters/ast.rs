use crate::error::{QueryError, QueryResult};
use crate::models::EntryRole;

/// Role restriction; one role at most, so both-roles is unrepresentable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    Any,
    UserOnly,
    AssistantOnly,
}

impl RoleFilter {
    /// Build from the two command-line switches, rejecting the combination of both
    pub fn from_flags(user_only: bool, assistant_only: bool) -> QueryResult<Self> {
        match (user_only, assistant_only) {
            (true, true) => Err(QueryError::ConflictingRoles),
            (true, false) => Ok(RoleFilter::UserOnly),
            (false, true) => Ok(RoleFilter::AssistantOnly),
            (false, false) => Ok(RoleFilter::Any),
        }
    }

    fn role(self) -> Option<EntryRole> {
        match self {
            RoleFilter::Any => None,
            RoleFilter::UserOnly => Some(EntryRole::User),
            RoleFilter::AssistantOnly => Some(EntryRole::Assistant),
        }
    }
}

/// User-facing filter switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOptions {
    /// Keep injected/administrative entries (`isMeta`)
    pub include_meta: bool,
    pub role: RoleFilter,
    /// Keep only user and assistant entries
    pub text_only: bool,
}

/// A single entry predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCondition {
    /// Drop entries flagged `isMeta`
    ExcludeMeta,
    /// Keep only entries of this role
    Role(EntryRole),
    /// Keep only user and assistant entries
    Conversational,
}

/// Conditions ANDed together, evaluated per entry before text extraction
///
/// An empty pipeline accepts everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPipeline {
    pub conditions: Vec<FilterCondition>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_condition(&mut self, condition: FilterCondition) {
        self.conditions.push(condition);
    }

    pub fn with(mut self, condition: FilterCondition) -> Self {
        self.add_condition(condition);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl From<&FilterOptions> for FilterPipeline {
    fn from(options: &FilterOptions) -> Self {
        let mut pipeline = FilterPipeline::new();
        if !options.include_meta {
            pipeline.add_condition(FilterCondition::ExcludeMeta);
        }
        if let Some(role) = options.role.role() {
            pipeline.add_condition(FilterCondition::Role(role));
        }
        if options.text_only {
            pipeline.add_condition(FilterCondition::Conversational);
        }
        pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_filter_from_flags() {
        assert_eq!(RoleFilter::from_flags(false, false).unwrap(), RoleFilter::Any);
        assert_eq!(RoleFilter::from_flags(true, false).unwrap(), RoleFilter::UserOnly);
        assert_eq!(RoleFilter::from_flags(false, true).unwrap(), RoleFilter::AssistantOnly);
    }

    #[test]
    fn test_role_filter_conflict_is_usage_error() {
        let err = RoleFilter::from_flags(true, true).unwrap_err();
        assert!(matches!(err, QueryError::ConflictingRoles));
        assert!(err.is_usage_error());
    }

    #[test]
    fn test_default_options_exclude_meta_only() {
        let pipeline = FilterPipeline::from(&FilterOptions::default());
        assert_eq!(pipeline.conditions, vec![FilterCondition::ExcludeMeta]);
    }

    #[test]
    fn test_all_options_build_all_conditions() {
        let options =
            FilterOptions { include_meta: false, role: RoleFilter::UserOnly, text_only: true };
        let pipeline = FilterPipeline::from(&options);
        assert_eq!(
            pipeline.conditions,
            vec![
                FilterCondition::ExcludeMeta,
                FilterCondition::Role(EntryRole::User),
                FilterCondition::Conversational,
            ]
        );
    }

    #[test]
    fn test_include_meta_with_no_other_filters_is_empty() {
        let options = FilterOptions { include_meta: true, ..FilterOptions::default() };
        assert!(FilterPipeline::from(&options).is_empty());
    }
}
