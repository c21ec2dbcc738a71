use approx::assert_relative_eq;
use uom::si::{
    energy::joule,
    f64::{Energy, Force, Length},
    force::newton,
    length::{centimeter, meter},
};

use descent_solvers::optimization::bfgs;
use integration_tests::problems::springs::{Spring, SpringNetwork};

fn meters(x: f64, y: f64) -> [Length; 2] {
    [Length::new::<meter>(x), Length::new::<meter>(y)]
}

fn network() -> SpringNetwork {
    SpringNetwork {
        springs: vec![
            Spring {
                anchor: meters(0.0, 0.0),
                stiffness: 100.0,
            },
            Spring {
                anchor: meters(2.0, 0.0),
                stiffness: 300.0,
            },
            Spring {
                anchor: meters(1.0, 3.0),
                stiffness: 50.0,
            },
        ],
        load: [Force::new::<newton>(0.0), Force::new::<newton>(-90.0)],
    }
}

#[test]
fn spring_network_settles_at_equilibrium() {
    let network = network();
    let expected = network.equilibrium();
    let config = bfgs::Config::new(1e-9, 10.0).unwrap();

    let mut energies = Vec::new();
    let observer = |event: &bfgs::Event<'_, SpringNetwork>| {
        if let Some(energy) = event.value() {
            energies.push(energy);
        }
        None
    };

    let start = [Length::new::<centimeter>(50.0), Length::new::<centimeter>(50.0)];
    let solution = bfgs::minimize(&network, &start, &config, observer).unwrap();

    assert_eq!(solution.status, bfgs::Status::Converged);
    for (actual, expected) in solution.x.iter().zip(expected) {
        assert_relative_eq!(actual.get::<meter>(), expected.get::<meter>(), epsilon = 1e-7);
    }

    // Each accepted step lowers the potential energy.
    assert!(energies.windows(2).all(|pair| pair[1] <= pair[0]));
    assert!(energies.iter().all(|e| *e < Energy::new::<joule>(1e3)));
}

#[test]
fn spring_network_through_the_simple_interface() {
    let network = network();
    let expected = network.equilibrium();

    let x = bfgs::optimize(&network, &meters(0.0, 0.0), 1e-9, 10.0)
        .unwrap()
        .expect("equilibrium lies within the trust region");

    assert_relative_eq!(x[0].get::<meter>(), expected[0].get::<meter>(), epsilon = 1e-7);
    assert_relative_eq!(x[1].get::<meter>(), expected[1].get::<meter>(), epsilon = 1e-7);
}

#[test]
fn trust_radius_can_be_given_as_a_length() {
    let network = network();

    // Equilibrium is about 1.4 m from the start; a 10 cm radius cannot reach it.
    let config = bfgs::Config::from_quantities(
        Length::new::<meter>(1e-9),
        Length::new::<centimeter>(10.0),
    )
    .unwrap();
    assert_relative_eq!(config.radius(), 0.1);

    match bfgs::minimize_unobserved(&network, &meters(0.0, 0.0), &config) {
        Err(bfgs::Error::OutOfTrustRegion { distance, radius, .. }) => {
            assert!(distance > radius);
            assert_relative_eq!(radius, 0.1);
        }
        other => panic!("expected a trust region breach, got {other:?}"),
    }

    let result = bfgs::optimize(&network, &meters(0.0, 0.0), 1e-9, config.radius()).unwrap();
    assert_eq!(result, None);
}
