//! Queues driven the way their two kinds of clients drive them: a graph
//! search lowering distances in an indexed queue, and an event schedule
//! draining a min queue by time.

use std::cmp::Ordering;

use multiway_heap::ByFn;
use multiway_heap::IndexMinPQ;
use multiway_heap::Multiway;
use multiway_heap::MultiwayHeap;
use multiway_heap::MultiwayMinPQ;

type Graph = Vec<Vec<(usize, u64)>>;

/// Dijkstra over an adjacency list, lowering open distances in place.
fn shortest_paths(graph: &Graph, source: usize) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; graph.len()];
    let mut open = IndexMinPQ::with_arity(Multiway::new(4).unwrap(), graph.len());
    dist[source] = Some(0);
    open.insert(source, 0u64).unwrap();

    while let Ok((node, g)) = open.extract_entry() {
        for &(next, cost) in &graph[node] {
            let new_g = g + cost;
            match dist[next] {
                Some(old_g) if old_g <= new_g => {}
                Some(_) => {
                    // Found better path to an open node.
                    dist[next] = Some(new_g);
                    open.decrease_key(next, new_g).unwrap();
                }
                None => {
                    dist[next] = Some(new_g);
                    open.insert(next, new_g).unwrap();
                }
            }
        }
    }
    dist
}

/// Bellman-Ford, as a slow reference.
fn reference_paths(graph: &Graph, source: usize) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; graph.len()];
    dist[source] = Some(0);
    for _ in 0..graph.len() {
        for (u, edges) in graph.iter().enumerate() {
            let Some(du) = dist[u] else { continue };
            for &(v, c) in edges {
                if dist[v].is_none_or(|dv| du + c < dv) {
                    dist[v] = Some(du + c);
                }
            }
        }
    }
    dist
}

#[test]
fn dijkstra_small_graph() {
    //   0 --7--> 1 --1--> 3
    //   |        ^        ^
    //   2        1        9
    //   v        |        |
    //   2 -------+        |
    //   +-----------------+
    let graph: Graph = vec![
        vec![(1, 7), (2, 2)],
        vec![(3, 1)],
        vec![(1, 1), (3, 9)],
        vec![],
        vec![(0, 1)],
    ];
    assert_eq!(
        shortest_paths(&graph, 0),
        vec![Some(0), Some(3), Some(2), Some(4), None]
    );
}

#[test]
fn dijkstra_matches_bellman_ford() {
    let n = 120;
    // Deterministic pseudo-random edges.
    let mut state = 0x2545F4914F6CDD1Du64;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let mut graph: Graph = vec![vec![]; n];
    for u in 0..n {
        for _ in 0..4 {
            let v = (next() % n as u64) as usize;
            let c = next() % 50 + 1;
            graph[u].push((v, c));
        }
    }
    for source in [0, 17, 119] {
        assert_eq!(shortest_paths(&graph, source), reference_paths(&graph, source));
    }
}

#[derive(Clone, Debug)]
struct Event {
    time: f64,
    particle: usize,
    /// Collision count of the particle when the event was scheduled.
    seen: u32,
}

#[test]
fn event_schedule_drains_by_time() {
    let by_time = ByFn::new(|a: &Event, b: &Event| {
        a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal)
    });
    let mut schedule: MultiwayMinPQ<Event, _> =
        MultiwayHeap::with_comparator(Multiway::default(), by_time);
    let mut collisions = [0u32; 3];

    for (time, particle) in [(3.5, 0), (0.5, 1), (2.0, 2), (1.25, 0), (9.0, 1)] {
        schedule.insert(Event {
            time,
            particle,
            seen: collisions[particle],
        });
    }

    let mut handled = vec![];
    while let Ok(event) = schedule.extract() {
        if event.seen != collisions[event.particle] {
            // Stale, the particle changed course since.
            continue;
        }
        collisions[event.particle] += 1;
        handled.push(event.time);
        if event.time < 1.0 {
            schedule.insert(Event {
                time: event.time + 5.0,
                particle: event.particle,
                seen: collisions[event.particle],
            });
        }
    }
    // 3.5 for particle 0 is stale after the 1.25 collision, 9.0 for
    // particle 1 is stale after the 0.5 one.
    assert_eq!(handled, vec![0.5, 1.25, 2.0, 5.5]);
}
