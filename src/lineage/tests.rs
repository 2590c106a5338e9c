use crate::lineage::{Animal, Label, LabelError, SpecialTag, Tribe};
use strum::IntoEnumIterator;

#[test]
fn tribe_numbers_are_one_to_seven() {
    let numbers: Vec<&str> = Tribe::iter().map(|t| t.number()).collect();
    assert_eq!(numbers, ["1", "2", "3", "4", "5", "6", "7"]);
    assert_eq!(Tribe::from_number("3").map(|t| t.name()), Some("East-African-Indian"));
    assert_eq!(Tribe::EuroAmerican.to_string(), "4 Euro-American");
}

#[test]
fn label_depth() -> Result<(), LabelError> {
    let lineage: Label = "2".parse()?;
    assert_eq!(lineage.depth(), 1);
    assert!(!lineage.is_sublineage());

    let sublineage: Label = " 2.2.1.1 ".parse()?;
    assert_eq!(sublineage.as_str(), "2.2.1.1");
    assert_eq!(sublineage.depth(), 4);
    assert_eq!(sublineage.tribe(), Tribe::EastAsian);
    Ok(())
}

#[test]
fn label_malformed() {
    assert_eq!("".parse::<Label>(), Err(LabelError::Empty));
    assert_eq!("4.".parse::<Label>(), Err(LabelError::EmptyLevel("4.".to_string())));
    assert_eq!("4. 3".parse::<Label>(), Err(LabelError::Whitespace("4. 3".to_string())));
    assert!(matches!("9.1".parse::<Label>(), Err(LabelError::UnknownLineage { .. })));
    assert!(matches!("La1".parse::<Label>(), Err(LabelError::UnknownLineage { .. })));
}

#[test]
fn concordance_uses_first_two_levels() -> Result<(), LabelError> {
    let a: Label = "4.3.1".parse()?;
    let b: Label = "4.3.2".parse()?;
    let c: Label = "4.2.1".parse()?;
    let d: Label = "4.3".parse()?;

    assert!(a.is_concordant(&b));
    assert!(b.is_concordant(&a));
    assert!(!a.is_concordant(&c));
    assert!(!c.is_concordant(&a));
    assert!(a.is_concordant(&d));
    Ok(())
}

#[test]
fn special_tags() {
    assert_eq!(SpecialTag::from_position("8624"), Some(SpecialTag::Bcg));
    assert_eq!(SpecialTag::LineageFour.animal(), None);
    assert_eq!(SpecialTag::Caprae.animal(), Some(Animal::Caprae));

    let animals: Vec<Animal> = SpecialTag::iter().filter_map(|t| t.animal()).collect();
    assert_eq!(animals, [Animal::BovisBcg, Animal::Bovis, Animal::Orygis, Animal::Caprae]);
    assert_eq!(Animal::from_short_name("Oryx"), Some(Animal::Orygis));
}
