//! Behaviour-driven tests covering system language detection.

use std::cell::RefCell;
use std::sync::{Mutex, MutexGuard};

mod support;

use nfc_util::test_support::LocaleEnvOverride;
use nfc_util::{EnvLocale, FixedLocale, Language, system_language};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::locale::{StepText, StepVariable};

static ENVIRONMENT_LOCK: Mutex<()> = Mutex::new(());

struct LanguageWorld {
    provider: RefCell<FixedLocale>,
    overrides: RefCell<Vec<LocaleEnvOverride>>,
    result: RefCell<Option<Option<Language>>>,
    _guard: MutexGuard<'static, ()>,
}

impl LanguageWorld {
    fn new() -> Self {
        let guard = ENVIRONMENT_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        Self {
            provider: RefCell::new(FixedLocale::unset()),
            overrides: RefCell::new(Vec::new()),
            result: RefCell::new(None),
            _guard: guard,
        }
    }

    fn store(&self, language: Option<Language>) {
        self.result.borrow_mut().replace(language);
    }

    fn language(&self) -> Option<Language> {
        self.result
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("the system language should have been requested"))
    }

    fn found(&self) -> Language {
        self.language()
            .unwrap_or_else(|| panic!("a language should have been determined"))
    }
}

impl Drop for LanguageWorld {
    fn drop(&mut self) {
        // Restore variables in reverse so repeated overrides unwind correctly.
        let mut overrides = self.overrides.take();
        overrides.reverse();
        drop(overrides);
    }
}

#[fixture]
fn world() -> LanguageWorld {
    LanguageWorld::new()
}

#[given("the system locale is {value}")]
fn set_locale(world: &LanguageWorld, value: StepText) {
    *world.provider.borrow_mut() = FixedLocale::new(value.into_inner());
}

#[given("no system locale is set")]
fn clear_locale(world: &LanguageWorld) {
    *world.provider.borrow_mut() = FixedLocale::unset();
}

#[given("no locale variables are set")]
fn clear_variables(world: &LanguageWorld) {
    world
        .overrides
        .borrow_mut()
        .extend(LocaleEnvOverride::clear_all());
}

#[given("the environment variable {variable} is {value}")]
fn set_variable(world: &LanguageWorld, variable: StepVariable, value: StepText) {
    world
        .overrides
        .borrow_mut()
        .push(LocaleEnvOverride::set(variable.name(), &value.into_inner()));
}

#[when("the system language is requested")]
fn request_language(world: &LanguageWorld) {
    let provider = world.provider.borrow().clone();
    world.store(system_language(&provider));
}

#[when("the system language is read from the environment")]
fn read_environment(world: &LanguageWorld) {
    world.store(system_language(&EnvLocale));
}

#[then("the language is {value}")]
fn assert_language(world: &LanguageWorld, value: StepText) {
    assert_eq!(world.found().language(), value.into_inner());
}

#[then("the territory is {value}")]
fn assert_territory(world: &LanguageWorld, value: StepText) {
    assert_eq!(world.found().territory(), Some(value.into_inner().as_str()));
}

#[then("there is no territory")]
fn assert_no_territory(world: &LanguageWorld) {
    assert_eq!(world.found().territory(), None);
}

#[then("no language is determined")]
fn assert_no_language(world: &LanguageWorld) {
    assert_eq!(world.language(), None);
}

#[scenario("tests/features/system_language.feature", index = 0)]
fn scenario_full_locale(world: LanguageWorld) {
    let _ = world;
}

#[scenario("tests/features/system_language.feature", index = 1)]
fn scenario_no_territory(world: LanguageWorld) {
    let _ = world;
}

#[scenario("tests/features/system_language.feature", index = 2)]
fn scenario_posix(world: LanguageWorld) {
    let _ = world;
}

#[scenario("tests/features/system_language.feature", index = 3)]
fn scenario_missing(world: LanguageWorld) {
    let _ = world;
}

#[scenario("tests/features/system_language.feature", index = 4)]
fn scenario_lc_all_precedence(world: LanguageWorld) {
    let _ = world;
}

#[scenario("tests/features/system_language.feature", index = 5)]
fn scenario_empty_lc_all(world: LanguageWorld) {
    let _ = world;
}
