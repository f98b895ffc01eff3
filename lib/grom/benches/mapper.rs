#![allow(clippy::panic)]

use codspeed_criterion_compat::{criterion_group, criterion_main, Criterion};
use grom::mapper::{GraphMapper, Mapper};
use grom::model::vocab::{rdf, xsd};
use grom::model::{Graph, Literal, NamedNode, Triple};

fn mapper_map(c: &mut Criterion) {
    let graph = generate_memberships(1_000);
    c.bench_function("Mapper::map", |b| {
        b.iter(|| Mapper::default().map(&graph).unwrap());
    });
}

fn mapper_through_graphs(c: &mut Criterion) {
    let graph = generate_memberships(1_000);
    c.bench_function("Mapper::through_graphs", |b| {
        b.iter(|| Mapper::default().through_graphs(&graph, "party7").unwrap());
    });
}

fn mapper_round_trip(c: &mut Criterion) {
    let mapper = Mapper::default();
    let graph = generate_memberships(1_000);
    c.bench_function("Mapper::serialize+parse", |b| {
        b.iter(|| mapper.parse(&mapper.serialize(&graph).unwrap()).unwrap());
    });
}

criterion_group!(mapper, mapper_map, mapper_through_graphs, mapper_round_trip);
criterion_main!(mapper);

fn generate_memberships(count: u64) -> Graph {
    let membership_type = NamedNode::new_unchecked("http://example.com/schema/Membership");
    let start_date = NamedNode::new_unchecked("http://example.com/schema/startDate");
    let has_party = NamedNode::new_unchecked("http://example.com/schema/hasParty");
    (0..count)
        .flat_map(|i| {
            let subject = NamedNode::new_unchecked(format!("http://example.com/membership{i}"));
            let party = NamedNode::new_unchecked(format!("http://example.com/party{}", i % 100));
            let start = Literal::new_typed_literal(format!("19{:02}-01-12", i % 100), xsd::DATE);
            [
                Triple::new(subject.clone(), rdf::TYPE, membership_type.clone()),
                Triple::new(subject.clone(), start_date.clone(), start),
                Triple::new(subject, has_party.clone(), party),
            ]
        })
        .collect()
}
