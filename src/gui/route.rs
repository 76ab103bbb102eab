use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Screen identifiers. The string forms are what navigation callbacks exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    MyActivities,
    Profile,
    Create,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::MyActivities => "my-activities",
            Route::Profile => "profile",
            Route::Create => "create",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Route::Home),
            "my-activities" => Ok(Route::MyActivities),
            "profile" => Ok(Route::Profile),
            "create" => Ok(Route::Create),
            other => Err(Error::Other(format!("Unknown route: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_strings() {
        for route in [Route::Home, Route::MyActivities, Route::Profile, Route::Create] {
            assert_eq!(route.as_str().parse::<Route>().unwrap(), route);
        }
        assert_eq!(Route::MyActivities.to_string(), "my-activities");
        assert!("settings".parse::<Route>().is_err());
    }
}
