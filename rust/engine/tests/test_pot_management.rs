use war_engine::pot::Pot;

#[test]
fn pot_accumulates_and_clears() {
    let mut pot = Pot::new();
    assert_eq!(pot.value(), 0);
    pot.add_cash(20);
    pot.add_cash(30);
    assert_eq!(pot.value(), 50);
    pot.clear();
    assert_eq!(pot.value(), 0);
}

#[test]
fn halving_rounds_down() {
    let mut pot = Pot::new();
    pot.add_cash(15);
    pot.halve();
    assert_eq!(pot.value(), 7);
    pot.clear();
    pot.halve();
    assert_eq!(pot.value(), 0, "halving an empty pot stays at zero");
}

#[test]
fn doubling_saturates_instead_of_overflowing() {
    let mut pot = Pot::new();
    pot.add_cash(20);
    pot.double();
    assert_eq!(pot.value(), 40);
    pot.add_cash(u32::MAX);
    pot.double();
    assert_eq!(pot.value(), u32::MAX);
}
