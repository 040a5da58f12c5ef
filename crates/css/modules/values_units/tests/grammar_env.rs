use css_values_units::config::UNITLESS_TIME_VAR;
use css_values_units::{GrammarConfig, UnitlessTime};
use std::env;

#[test]
fn grammar_config_loads_from_the_environment() {
    // SAFETY: single test in this binary, no other threads touch the environment.
    unsafe { env::set_var(UNITLESS_TIME_VAR, "seconds") };
    assert_eq!(GrammarConfig::from_env().unitless_time, UnitlessTime::Seconds);

    // SAFETY: as above.
    unsafe { env::set_var(UNITLESS_TIME_VAR, "Reject") };
    assert_eq!(GrammarConfig::from_env().unitless_time, UnitlessTime::Reject);

    // SAFETY: as above.
    unsafe { env::remove_var(UNITLESS_TIME_VAR) };
    assert_eq!(GrammarConfig::from_env(), GrammarConfig::default());
}
