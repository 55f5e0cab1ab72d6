use mlp_engine::data::builtin_xor;
use mlp_engine::{Example, Network, NetworkSnapshot, NetworkSpec, Trainer};

fn examples() -> Vec<Example> {
    let mut set = builtin_xor();
    set.push(Example::new(vec![0.5, -0.25], vec![0.3]));
    set
}

#[test]
fn equal_seeds_give_equal_trajectories() {
    let spec = NetworkSpec::new(vec![2, 3, 2, 1], 0.1);
    let mut a = Trainer::seeded(&spec, 1234).unwrap();
    let mut b = Trainer::seeded(&spec, 1234).unwrap();
    assert_eq!(a.initial_snapshot(), b.initial_snapshot());

    for _ in 0..5 {
        a.train(&examples(), 40).unwrap();
        b.train(&examples(), 40).unwrap();
        assert_eq!(a.network().snapshot(), b.network().snapshot());
    }
    assert_eq!(a.errors(), b.errors());
    assert_eq!(a.errors().len(), 200);
}

#[test]
fn different_seeds_give_different_weights() {
    let spec = NetworkSpec::new(vec![2, 2, 1], 0.1);
    let a = Network::seeded(&spec, 1).unwrap();
    let b = Network::seeded(&spec, 2).unwrap();
    assert_ne!(a.snapshot(), b.snapshot());
}

#[test]
fn example_order_changes_the_result() {
    let spec = NetworkSpec::new(vec![2, 2, 1], 0.1);
    let forward = examples();
    let mut backward = forward.clone();
    backward.reverse();

    let mut a = Trainer::seeded(&spec, 77).unwrap();
    let mut b = Trainer::seeded(&spec, 77).unwrap();
    a.train(&forward, 1).unwrap();
    b.train(&backward, 1).unwrap();
    assert_ne!(a.network().snapshot(), b.network().snapshot());
}

#[test]
fn fixed_parameters_replace_random_initialisation() {
    let spec = NetworkSpec::new(vec![2, 2, 1], 0.1);
    let fixed = Network::seeded(&spec, 0).unwrap().snapshot();

    let run = |snapshot: &NetworkSnapshot| {
        let network = Network::from_snapshot(snapshot, 0.1, Default::default()).unwrap();
        let mut trainer = Trainer::new(network, None);
        trainer.train(&examples(), 100).unwrap();
        (trainer.errors().to_vec(), trainer.network().snapshot())
    };
    assert_eq!(run(&fixed), run(&fixed));
}
