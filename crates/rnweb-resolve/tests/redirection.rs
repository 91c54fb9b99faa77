//! End-to-end checks of the resolution rules for a project.

use rnweb_config::Locations;
use rnweb_resolve::{AliasTable, Decision, InclusionRules, ModuleReference, RedirectionRules};
use std::path::PathBuf;

#[test]
fn react_native_platform_request_is_redirected_to_web_build() {
    let locations = Locations::new("/app");
    let rules = RedirectionRules::platform_defaults(&locations).unwrap();

    let reference = ModuleReference::new(
        "Platform",
        "/app/node_modules/react-native/Libraries/Utilities/Platform.js",
    );
    let out = rules.apply(reference);
    assert_eq!(
        out.request,
        "/app/node_modules/expo/build/web/Utilities/Platform"
    );
}

#[test]
fn networking_request_from_app_code_is_untouched() {
    let locations = Locations::new("/app");
    let rules = RedirectionRules::platform_defaults(&locations).unwrap();
    let reference = ModuleReference::new("RCTNetworking", "/app/src/api");
    assert!(!rules.redirects(&reference));
    assert_eq!(rules.apply(reference.clone()), reference);
}

#[test]
fn project_and_vendor_inclusion() {
    let rules = InclusionRules::for_project(&Locations::new("/project"));
    assert_eq!(
        rules.evaluate("/project/src/App.js"),
        Decision::Include(PathBuf::from("/project/src/App.js"))
    );
    assert_eq!(
        rules.evaluate("/project/node_modules/lodash/index.js"),
        Decision::Exclude
    );
}

#[test]
fn component_imports_resolve_to_react_native_web() {
    let table = AliasTable::platform_defaults().unwrap();
    for name in ["View", "Text", "StyleSheet", "TouchableWithoutFeedback"] {
        assert_eq!(
            table.resolve(name),
            Some(format!("react-native-web/dist/cjs/exports/{name}"))
        );
    }
    assert_eq!(table.resolve("React").as_deref(), Some("react"));
    assert_eq!(table.resolve("lodash"), None);
}
