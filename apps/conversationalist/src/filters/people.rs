//! People Filter Engine.
//!
//! Every dimension is an independent predicate and a profile is kept only if
//! all of them hold. The privacy gate runs last and always applies: a member
//! who hides both location and interests is never listed, whatever the other
//! filters say.

use super::{Choice, TextQuery};
use crate::types::UserProfile;

/// Filters `users` down to the profiles the people screen shows.
///
/// Output keeps input order. Predicates, all of which must hold:
///
/// 1. `selected_interests` is empty, or the user has at least one of them
/// 2. `area_filter` admits `location.area`
/// 3. `personality_filter` admits `traits.personality_type`
/// 4. `query` is empty, or is a case-insensitive substring of the display
///    name, an interest or a skill
/// 5. the user's privacy settings allow listing
#[must_use]
pub fn filter_people<'a>(
    users: &'a [UserProfile],
    selected_interests: &[String],
    area_filter: &Choice<String>,
    personality_filter: &Choice<String>,
    query: &str,
) -> Vec<&'a UserProfile> {
    let query = TextQuery::new(query);

    let matches: Vec<&UserProfile> = users
        .iter()
        .filter(|user| selected_interests.is_empty() || user.shares_any_interest(selected_interests))
        .filter(|user| area_filter.admits(user.location.area.as_str()))
        .filter(|user| personality_filter.admits(user.traits.personality_type.as_str()))
        .filter(|user| query.is_empty() || matches_text(user, &query))
        .filter(|user| user.privacy.allows_listing())
        .collect();

    tracing::debug!(
        total = users.len(),
        matched = matches.len(),
        interests = selected_interests.len(),
        "Filtered people"
    );
    matches
}

fn matches_text(user: &UserProfile, query: &TextQuery) -> bool {
    query.matches(&user.display_name)
        || query.matches_any(&user.interests)
        || query.matches_any(&user.skills)
}

/// Selector state of the people screen
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeopleQuery {
    /// Multi-selected interests (OR within the set)
    pub interests: Vec<String>,
    /// Selected area
    pub area: Choice<String>,
    /// Selected personality type
    pub personality: Choice<String>,
    /// Search box contents
    pub text: String,
}

impl PeopleQuery {
    /// Runs the query
    #[must_use]
    pub fn apply<'a>(&self, users: &'a [UserProfile]) -> Vec<&'a UserProfile> {
        filter_people(users, &self.interests, &self.area, &self.personality, &self.text)
    }

    /// Adds `interest` to the selection, or removes it if already selected
    pub fn toggle_interest(&mut self, interest: &str) {
        toggle_interest(&mut self.interests, interest);
    }
}

/// Adds `interest` to `selection`, or removes it if present.
pub fn toggle_interest(selection: &mut Vec<String>, interest: &str) {
    if let Some(index) = selection.iter().position(|i| i == interest) {
        selection.remove(index);
    } else {
        selection.push(interest.to_string());
    }
}

/// An entry of the area selector
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct AreaOption {
    /// Text shown in the selector ("Fishtown, Philadelphia")
    pub label: String,
    /// Value matched against `location.area`
    pub value: String,
}

/// Distinct areas across `users`, sorted by label.
#[must_use]
pub fn area_options(users: &[UserProfile]) -> Vec<AreaOption> {
    let mut options: Vec<AreaOption> = users
        .iter()
        .map(|user| AreaOption {
            label: format!("{}, {}", user.location.area, user.location.city),
            value: user.location.area.clone(),
        })
        .collect();
    options.sort();
    options.dedup();
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::user;

    fn names(users: &[&UserProfile]) -> Vec<String> {
        users.iter().map(|u| u.display_name.clone()).collect()
    }

    fn community() -> Vec<UserProfile> {
        let mut alex = user("user1", "Alex", "Fishtown", "extroverted");
        alex.interests = vec!["Feminist activism".into(), "Public speaking".into()];
        alex.skills = vec!["Facilitation".into()];

        let mut sam = user("user2", "Sam", "Center City", "introverted");
        sam.interests = vec!["Labor rights".into(), "Conflict resolution".into()];

        let mut jamie = user("user4", "Jamie", "University City", "extroverted");
        jamie.interests = vec!["Public speaking".into()];
        jamie.privacy.show_location = false;

        let mut ghost = user("user9", "Ghost", "Fishtown", "extroverted");
        ghost.interests = vec!["Public speaking".into()];
        ghost.privacy.show_location = false;
        ghost.privacy.show_interests = false;

        vec![alex, sam, jamie, ghost]
    }

    #[test]
    fn no_filters_lists_every_visible_member() {
        let users = community();
        let result = filter_people(&users, &[], &Choice::All, &Choice::All, "");
        assert_eq!(names(&result), vec!["Alex", "Sam", "Jamie"]);
    }

    #[test]
    fn interests_use_or_semantics() {
        let users = community();
        let selected = vec!["Labor rights".to_string(), "Feminist activism".to_string()];
        let result = filter_people(&users, &selected, &Choice::All, &Choice::All, "");
        assert_eq!(names(&result), vec!["Alex", "Sam"]);
    }

    #[test]
    fn area_and_personality_are_exact() {
        let users = community();

        let area = Choice::from_selection("Fishtown");
        assert_eq!(
            names(&filter_people(&users, &[], &area, &Choice::All, "")),
            vec!["Alex"]
        );

        let personality = Choice::from_selection("extroverted");
        assert_eq!(
            names(&filter_people(&users, &[], &Choice::All, &personality, "")),
            vec!["Alex", "Jamie"]
        );
    }

    #[test]
    fn query_matches_name_interest_or_skill() {
        let users = community();
        let search = |q: &str| names(&filter_people(&users, &[], &Choice::All, &Choice::All, q));

        assert_eq!(search("sam"), vec!["Sam"]);
        assert_eq!(search("PUBLIC"), vec!["Alex", "Jamie"]);
        assert_eq!(search("facilit"), vec!["Alex"]);
        assert!(search("nobody").is_empty());
    }

    #[test]
    fn hidden_member_never_listed() {
        let users = community();
        let selected = vec!["Public speaking".to_string()];
        let area = Choice::from_selection("Fishtown");
        let result = filter_people(&users, &selected, &area, &Choice::All, "ghost");
        assert!(result.is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut query = PeopleQuery::default();
        query.toggle_interest("Storytelling");
        query.toggle_interest("Labor rights");
        assert_eq!(query.interests, vec!["Storytelling", "Labor rights"]);

        query.toggle_interest("Storytelling");
        assert_eq!(query.interests, vec!["Labor rights"]);
    }

    #[test]
    fn area_options_are_sorted_and_distinct() {
        let users = community();
        let options = area_options(&users);
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Center City, Philadelphia",
                "Fishtown, Philadelphia",
                "University City, Philadelphia"
            ]
        );
        assert_eq!(options[1].value, "Fishtown");
    }
}
