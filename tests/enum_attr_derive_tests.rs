use enum_attr::{DeclarationKind, EnumAttr, EnumAttrModel};

#[derive(EnumAttr, Default)]
struct Package {
    #[enum_attr(values(out_of_stock = -1, ready = 0, selling = 1), default = ready)]
    status: Option<i64>,
}

#[derive(EnumAttr, Default)]
struct Profile {
    #[enum_attr(values(male = 0, female = 1))]
    sex: Option<i64>,
}

#[derive(EnumAttr, Default)]
struct ProfileWithKeyDefault {
    #[enum_attr(values(male = 0, female = 1), default = male)]
    sex: Option<i64>,
}

#[derive(EnumAttr, Default)]
struct ProfileWithValueDefault {
    #[enum_attr(values(male = 0, female = 1), default = 1)]
    sex: Option<i64>,
}

#[derive(EnumAttr, Default)]
struct ListProfile {
    #[enum_attr(values(0, 1))]
    sex: Option<i64>,
}

#[derive(EnumAttr, Default)]
struct ReversedListProfile {
    #[enum_attr(values(1, 0), default = 0)]
    sex: Option<i64>,
}

#[derive(EnumAttr, Default)]
struct Listing {
    #[enum_attr(values(draft = 0, published = 1, archived = 2), default = draft)]
    state: Option<i64>,
    #[enum_attr(values(rent = "rent", sale = "sale"))]
    deal: Option<&'static str>,
}

#[derive(EnumAttr, Default)]
struct Inventory {
    #[enum_attr(values(low = 0, high = 1), plural = "stock_levels", default = low)]
    stock: Option<i64>,
    #[enum_attr(values(toys = 0, books = 1))]
    category: Option<i64>,
}

#[derive(EnumAttr)]
struct Person {
    name: String,
    #[enum_attr(values(0, 1), default = 0)]
    sex: Option<i64>,
}

impl Person {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sex: None,
        }
        .with_enum_defaults()
    }
}

#[test]
fn mapping_without_default_starts_unset() {
    let profile = Profile::default().with_enum_defaults();

    assert_eq!(profile.sex(), None);
    assert!(!profile.is_male());
    assert!(!profile.is_female());
}

#[test]
fn mapping_generates_a_predicate_and_mutator_per_entry() {
    let mut package = Package::default();

    package.set_out_of_stock();
    assert!(package.is_out_of_stock());
    package.set_ready();
    assert!(package.is_ready());
    package.set_selling();
    assert!(package.is_selling());

    let descriptors = Package::enum_attr_descriptors();
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].entries.len(), 3);
}

#[test]
fn mutator_flips_own_predicate_and_clears_siblings() {
    let mut profile = Profile::default();

    profile.set_male();
    assert_eq!(profile.sex(), Some(&0));
    assert!(profile.is_male());
    assert!(!profile.is_female());

    profile.set_female();
    assert_eq!(profile.sex(), Some(&1));
    assert!(profile.is_female());
    assert!(!profile.is_male());
}

#[test]
fn default_by_entry_name_resolves_to_mapped_value() {
    let profile = ProfileWithKeyDefault::default().with_enum_defaults();

    assert_eq!(profile.sex(), Some(&0));
    assert!(profile.is_male());
    assert!(!profile.is_female());
}

#[test]
fn default_by_raw_value_is_used_verbatim() {
    let profile = ProfileWithValueDefault::default().with_enum_defaults();

    assert_eq!(profile.sex(), Some(&1));
    assert!(profile.is_female());
    assert!(!profile.is_male());
}

#[test]
fn list_default_is_a_value_not_an_index() {
    let profile = ReversedListProfile::default().with_enum_defaults();

    assert_eq!(profile.sex(), Some(&0));
}

#[test]
fn available_values_preserve_declaration_order() {
    assert_eq!(ListProfile::AVAILABLE_SEXES, &[0, 1]);
    assert_eq!(ReversedListProfile::AVAILABLE_SEXES, &[1, 0]);
    assert_eq!(
        Package::AVAILABLE_STATUSES,
        &[("out_of_stock", -1), ("ready", 0), ("selling", 1)],
    );

    let package = Package::default();
    assert_eq!(package.available_statuses(), Package::AVAILABLE_STATUSES);
}

#[test]
fn setter_accepts_values_outside_the_declared_set() {
    let mut profile = Profile::default();

    profile.set_sex(42);
    assert_eq!(profile.sex(), Some(&42));
    assert!(!profile.is_male());
    assert!(!profile.is_female());
}

#[test]
fn set_default_is_idempotent_and_respects_existing_values() {
    let mut package = Package::default();

    package.set_default_status();
    assert_eq!(package.status(), Some(&0));
    package.set_default_status();
    assert_eq!(package.status(), Some(&0));

    let mut sold_out = Package::default();
    sold_out.set_out_of_stock();
    sold_out.set_default_status();
    assert_eq!(sold_out.status(), Some(&-1));
}

#[test]
fn applying_defaults_after_a_constructor_with_arguments() {
    let person = Person::new("scorix");

    assert_eq!(person.name, "scorix");
    assert_eq!(person.sex(), Some(&0));
}

#[test]
fn worked_example_from_the_declaration_docs() {
    let mut profile = ProfileWithKeyDefault::default().with_enum_defaults();
    assert_eq!(profile.sex(), Some(&0));

    profile.set_female();
    assert_eq!(profile.sex(), Some(&1));
    assert!(profile.is_female());
    assert!(!profile.is_male());
}

#[test]
fn fields_without_a_default_stay_unset_when_defaults_are_applied() {
    let listing = Listing::default().with_enum_defaults();

    assert_eq!(listing.state(), Some(&0));
    assert_eq!(listing.deal(), None);
}

#[test]
fn string_valued_entries_work_like_numeric_ones() {
    let mut listing = Listing::default();

    listing.set_rent();
    assert_eq!(listing.deal(), Some(&"rent"));
    assert!(listing.is_rent());
    assert!(!listing.is_sale());
    assert_eq!(Listing::AVAILABLE_DEALS, &[("rent", "rent"), ("sale", "sale")]);
}

#[test]
fn plural_override_names_the_availability_surface() {
    let inventory = Inventory::default();

    assert_eq!(Inventory::AVAILABLE_STOCK_LEVELS, &[("low", 0), ("high", 1)]);
    assert_eq!(inventory.available_stock_levels(), &[("low", 0), ("high", 1)]);
}

#[test]
fn derived_plurals_cover_common_english_endings() {
    // status -> statuses, sex -> sexes, category -> categories, deal -> deals
    let package = Package::default();
    let profile = Profile::default();
    let inventory = Inventory::default();
    let listing = Listing::default();

    assert!(package.available_statuses().len() == 3);
    assert!(profile.available_sexes().len() == 2);
    assert!(inventory.available_categories().len() == 2);
    assert!(listing.available_deals().len() == 2);
}

#[test]
fn descriptors_expose_the_full_declaration() {
    let descriptors = Package::enum_attr_descriptors();
    assert_eq!(descriptors.len(), 1);

    let status = &descriptors[0];
    assert_eq!(status.field, "status");
    assert_eq!(status.plural, "statuses");
    assert_eq!(status.kind, DeclarationKind::Mapping);
    assert_eq!(status.entry_names(), vec!["out_of_stock", "ready", "selling"]);
    assert_eq!(status.value_of("ready"), Some(&serde_json::json!(0)));
    assert_eq!(status.value_of("missing"), None);
    assert_eq!(status.default, Some(serde_json::json!(0)));
    assert!(!status.write_through);

    let descriptors = ListProfile::enum_attr_descriptors();
    assert_eq!(descriptors[0].kind, DeclarationKind::List);
    assert_eq!(descriptors[0].entries.len(), 2);
    assert_eq!(descriptors[0].entries[0].name, None);
    assert_eq!(descriptors[0].default, None);

    let descriptors = Inventory::enum_attr_descriptors();
    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].field, "stock");
    assert_eq!(descriptors[0].plural, "stock_levels");
    assert_eq!(descriptors[1].field, "category");
}
