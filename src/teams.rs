#[derive(Debug, Clone, Copy)]
pub struct TeamInfo {
    pub id: u32,
    pub abbrev: &'static str,
    pub name: &'static str,
}

/// The 30 NBA franchises, in stats.nba.com id order. The ids are stable across
/// seasons, so the table is compiled in rather than fetched.
pub const NBA_TEAMS: &[TeamInfo] = &[
    TeamInfo {
        id: 1610612737,
        abbrev: "ATL",
        name: "Atlanta Hawks",
    },
    TeamInfo {
        id: 1610612738,
        abbrev: "BOS",
        name: "Boston Celtics",
    },
    TeamInfo {
        id: 1610612739,
        abbrev: "CLE",
        name: "Cleveland Cavaliers",
    },
    TeamInfo {
        id: 1610612740,
        abbrev: "NOP",
        name: "New Orleans Pelicans",
    },
    TeamInfo {
        id: 1610612741,
        abbrev: "CHI",
        name: "Chicago Bulls",
    },
    TeamInfo {
        id: 1610612742,
        abbrev: "DAL",
        name: "Dallas Mavericks",
    },
    TeamInfo {
        id: 1610612743,
        abbrev: "DEN",
        name: "Denver Nuggets",
    },
    TeamInfo {
        id: 1610612744,
        abbrev: "GSW",
        name: "Golden State Warriors",
    },
    TeamInfo {
        id: 1610612745,
        abbrev: "HOU",
        name: "Houston Rockets",
    },
    TeamInfo {
        id: 1610612746,
        abbrev: "LAC",
        name: "LA Clippers",
    },
    TeamInfo {
        id: 1610612747,
        abbrev: "LAL",
        name: "Los Angeles Lakers",
    },
    TeamInfo {
        id: 1610612748,
        abbrev: "MIA",
        name: "Miami Heat",
    },
    TeamInfo {
        id: 1610612749,
        abbrev: "MIL",
        name: "Milwaukee Bucks",
    },
    TeamInfo {
        id: 1610612750,
        abbrev: "MIN",
        name: "Minnesota Timberwolves",
    },
    TeamInfo {
        id: 1610612751,
        abbrev: "BKN",
        name: "Brooklyn Nets",
    },
    TeamInfo {
        id: 1610612752,
        abbrev: "NYK",
        name: "New York Knicks",
    },
    TeamInfo {
        id: 1610612753,
        abbrev: "ORL",
        name: "Orlando Magic",
    },
    TeamInfo {
        id: 1610612754,
        abbrev: "IND",
        name: "Indiana Pacers",
    },
    TeamInfo {
        id: 1610612755,
        abbrev: "PHI",
        name: "Philadelphia 76ers",
    },
    TeamInfo {
        id: 1610612756,
        abbrev: "PHX",
        name: "Phoenix Suns",
    },
    TeamInfo {
        id: 1610612757,
        abbrev: "POR",
        name: "Portland Trail Blazers",
    },
    TeamInfo {
        id: 1610612758,
        abbrev: "SAC",
        name: "Sacramento Kings",
    },
    TeamInfo {
        id: 1610612759,
        abbrev: "SAS",
        name: "San Antonio Spurs",
    },
    TeamInfo {
        id: 1610612760,
        abbrev: "OKC",
        name: "Oklahoma City Thunder",
    },
    TeamInfo {
        id: 1610612761,
        abbrev: "TOR",
        name: "Toronto Raptors",
    },
    TeamInfo {
        id: 1610612762,
        abbrev: "UTA",
        name: "Utah Jazz",
    },
    TeamInfo {
        id: 1610612763,
        abbrev: "MEM",
        name: "Memphis Grizzlies",
    },
    TeamInfo {
        id: 1610612764,
        abbrev: "WAS",
        name: "Washington Wizards",
    },
    TeamInfo {
        id: 1610612765,
        abbrev: "DET",
        name: "Detroit Pistons",
    },
    TeamInfo {
        id: 1610612766,
        abbrev: "CHA",
        name: "Charlotte Hornets",
    },
];
