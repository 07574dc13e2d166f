//! Plain data the screens bind to. No rendering happens here.

use serde::Serialize;

use crate::model::{Match, Place, Side, Team};

/// What a list row shows: the two teams' names and crests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRow {
    pub home_team_name: String,
    pub home_team_image: String,
    pub visitor_team_name: String,
    pub visitor_team_image: String,
}

impl From<&Match> for MatchRow {
    fn from(fixture: &Match) -> Self {
        Self {
            home_team_name: fixture.home_team.name.clone(),
            home_team_image: fixture.home_team.image.clone(),
            visitor_team_name: fixture.visitor_team.name.clone(),
            visitor_team_image: fixture.visitor_team.image.clone(),
        }
    }
}

/// One side of the detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamDetail {
    pub side: Side,
    pub name: String,
    pub image: String,
    pub stars: u32,
    /// Score label text; `None` leaves the label blank.
    pub score: Option<String>,
}

impl TeamDetail {
    fn new(side: Side, team: &Team) -> Self {
        Self {
            side,
            name: team.name.clone(),
            image: team.image.clone(),
            stars: team.stars,
            score: team.score.map(|s| s.to_string()),
        }
    }

    fn to_team(&self) -> Option<Team> {
        let score = match &self.score {
            Some(text) => Some(text.parse().ok()?),
            None => None,
        };
        Some(Team {
            name: self.name.clone(),
            image: self.image.clone(),
            stars: self.stars,
            score,
        })
    }
}

/// Everything the detail screen shows for a single match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchDetail {
    /// Toolbar title, the venue name.
    pub title: String,
    pub place_image: String,
    pub description: String,
    pub home: TeamDetail,
    pub visitor: TeamDetail,
}

impl MatchDetail {
    /// Rebuild the match this detail was bound from.
    ///
    /// Returns `None` only if a score label was edited into something that
    /// is not a number.
    pub fn to_match(&self) -> Option<Match> {
        Some(Match {
            place: Place {
                name: self.title.clone(),
                image: self.place_image.clone(),
            },
            description: self.description.clone(),
            home_team: self.home.to_team()?,
            visitor_team: self.visitor.to_team()?,
        })
    }
}

impl From<&Match> for MatchDetail {
    fn from(fixture: &Match) -> Self {
        Self {
            title: fixture.place.name.clone(),
            place_image: fixture.place.image.clone(),
            description: fixture.description.clone(),
            home: TeamDetail::new(Side::Home, &fixture.home_team),
            visitor: TeamDetail::new(Side::Visitor, &fixture.visitor_team),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::tests::sample_match;

    #[test]
    fn test_row_binds_team_names_and_images() {
        let fixture = sample_match(4, 2, 3);
        let row = MatchRow::from(&fixture);
        assert_eq!(row.home_team_name, "Home 4");
        assert_eq!(row.home_team_image, "https://example.com/home4.png");
        assert_eq!(row.visitor_team_name, "Visitor 4");
        assert_eq!(row.visitor_team_image, "https://example.com/visitor4.png");
    }

    #[test]
    fn test_detail_without_scores() {
        let fixture = sample_match(1, 3, 5);
        let detail = MatchDetail::from(&fixture);

        assert_eq!(detail.title, "Stadium 1");
        assert_eq!(detail.description, "Round 1");
        assert_eq!(detail.home.side, Side::Home);
        assert_eq!(detail.visitor.side, Side::Visitor);
        assert_eq!(detail.home.stars, 3);
        assert_eq!(detail.visitor.stars, 5);
        assert_eq!(detail.home.score, None);
        assert_eq!(detail.to_match(), Some(fixture));
    }

    #[test]
    fn test_detail_serializes_side_as_lowercase() {
        let detail = MatchDetail::from(&sample_match(3, 1, 1));
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["home"]["side"], "home");
        assert_eq!(json["visitor"]["side"], "visitor");
    }

    #[test]
    fn test_detail_is_lossless_after_simulation() {
        let mut fixture = sample_match(2, 4, 1);
        fixture.home_team.score = Some(4);
        fixture.visitor_team.score = Some(0);

        let detail = MatchDetail::from(&fixture);
        assert_eq!(detail.home.score.as_deref(), Some("4"));
        assert_eq!(detail.visitor.score.as_deref(), Some("0"));
        assert_eq!(detail.to_match(), Some(fixture));
    }
}
