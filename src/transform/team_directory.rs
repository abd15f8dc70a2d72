//! Static facts about NFL franchises, keyed by the nflverse abbreviation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Franchise {
    pub name: &'static str,
    pub city: &'static str,
    pub conference: &'static str,
    pub division: &'static str,
}

const fn franchise(
    name: &'static str,
    city: &'static str,
    conference: &'static str,
    division: &'static str,
) -> Franchise {
    Franchise {
        name,
        city,
        conference,
        division,
    }
}

/// Look up a franchise. Relocated teams keep their historical abbreviations
/// (`OAK`, `SD`, `STL`) so older schedules resolve too.
pub fn lookup(abbreviation: &str) -> Option<Franchise> {
    let team = match abbreviation {
        "BUF" => franchise("Buffalo Bills", "Buffalo", "AFC", "AFC East"),
        "MIA" => franchise("Miami Dolphins", "Miami", "AFC", "AFC East"),
        "NE" => franchise("New England Patriots", "Foxborough", "AFC", "AFC East"),
        "NYJ" => franchise("New York Jets", "New York", "AFC", "AFC East"),

        "BAL" => franchise("Baltimore Ravens", "Baltimore", "AFC", "AFC North"),
        "CIN" => franchise("Cincinnati Bengals", "Cincinnati", "AFC", "AFC North"),
        "CLE" => franchise("Cleveland Browns", "Cleveland", "AFC", "AFC North"),
        "PIT" => franchise("Pittsburgh Steelers", "Pittsburgh", "AFC", "AFC North"),

        "HOU" => franchise("Houston Texans", "Houston", "AFC", "AFC South"),
        "IND" => franchise("Indianapolis Colts", "Indianapolis", "AFC", "AFC South"),
        "JAX" => franchise("Jacksonville Jaguars", "Jacksonville", "AFC", "AFC South"),
        "TEN" => franchise("Tennessee Titans", "Nashville", "AFC", "AFC South"),

        "DEN" => franchise("Denver Broncos", "Denver", "AFC", "AFC West"),
        "KC" => franchise("Kansas City Chiefs", "Kansas City", "AFC", "AFC West"),
        "LAC" => franchise("Los Angeles Chargers", "Los Angeles", "AFC", "AFC West"),
        "LV" => franchise("Las Vegas Raiders", "Las Vegas", "AFC", "AFC West"),
        "OAK" => franchise("Oakland Raiders", "Oakland", "AFC", "AFC West"),
        "SD" => franchise("San Diego Chargers", "San Diego", "AFC", "AFC West"),

        "DAL" => franchise("Dallas Cowboys", "Dallas", "NFC", "NFC East"),
        "NYG" => franchise("New York Giants", "New York", "NFC", "NFC East"),
        "PHI" => franchise("Philadelphia Eagles", "Philadelphia", "NFC", "NFC East"),
        "WAS" => franchise("Washington Commanders", "Washington", "NFC", "NFC East"),

        "CHI" => franchise("Chicago Bears", "Chicago", "NFC", "NFC North"),
        "DET" => franchise("Detroit Lions", "Detroit", "NFC", "NFC North"),
        "GB" => franchise("Green Bay Packers", "Green Bay", "NFC", "NFC North"),
        "MIN" => franchise("Minnesota Vikings", "Minneapolis", "NFC", "NFC North"),

        "ATL" => franchise("Atlanta Falcons", "Atlanta", "NFC", "NFC South"),
        "CAR" => franchise("Carolina Panthers", "Charlotte", "NFC", "NFC South"),
        "NO" => franchise("New Orleans Saints", "New Orleans", "NFC", "NFC South"),
        "TB" => franchise("Tampa Bay Buccaneers", "Tampa", "NFC", "NFC South"),

        "ARI" => franchise("Arizona Cardinals", "Glendale", "NFC", "NFC West"),
        "LA" | "LAR" => franchise("Los Angeles Rams", "Los Angeles", "NFC", "NFC West"),
        "SEA" => franchise("Seattle Seahawks", "Seattle", "NFC", "NFC West"),
        "SF" => franchise("San Francisco 49ers", "San Francisco", "NFC", "NFC West"),
        "STL" => franchise("St. Louis Rams", "St. Louis", "NFC", "NFC West"),

        _ => return None,
    };
    Some(team)
}
