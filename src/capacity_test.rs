#[cfg(test)]
mod compute_capacity_tests {
    use crate::capacity::{compute_capacity, Capacity, InvalidFlavorError};
    use crate::model::{ComputeNode, Flavor};

    fn node(hostname: &str) -> ComputeNode {
        ComputeNode {
            hostname: hostname.to_owned(),
            vcpus: 8,
            vcpus_used: 2,
            memory_mb: 16000,
            free_ram_mb: 8000,
            local_gb: 100,
            local_gb_used: 40,
        }
    }

    fn small_flavor() -> Flavor {
        Flavor {
            name: "m1.small".to_owned(),
            vcpus: 2,
            memory_mb: 2000,
            root_gb: 10,
            ephemeral_gb: 0,
        }
    }

    #[test]
    fn single_node_free_and_max_counts() {
        // cpu 6/2=3, ram 8000/2000=4, disk 60/10=6 -> free 3
        // cpu 8/2=4, ram 16000/2000=8, disk 100/10=10 -> max 4
        let result = compute_capacity(&[node("node-1")], &small_flavor()).unwrap();

        assert_eq!(Capacity { free: 3, max: 4 }, result);
    }

    #[test]
    fn empty_node_list_has_no_capacity() {
        let result = compute_capacity(&[], &small_flavor()).unwrap();

        assert_eq!(Capacity { free: 0, max: 0 }, result);
    }

    #[test]
    fn oversubscribed_cpu_contributes_nothing_to_free() {
        let mut oversubscribed = node("node-1");
        oversubscribed.vcpus_used = 10;

        let result = compute_capacity(&[oversubscribed], &small_flavor()).unwrap();

        assert_eq!(0, result.free);
        // Nominal capacity ignores current allocation.
        assert_eq!(4, result.max);
    }

    #[test]
    fn oversubscribed_disk_never_subtracts_from_the_total() {
        let mut healthy = node("node-1");
        healthy.vcpus = 100;
        healthy.vcpus_used = 0;
        let mut overcommitted = node("node-2");
        overcommitted.local_gb_used = 150;

        let alone = compute_capacity(&[healthy.clone()], &small_flavor()).unwrap();
        let with_overcommitted = compute_capacity(&[healthy, overcommitted], &small_flavor()).unwrap();

        assert_eq!(alone.free, with_overcommitted.free);
    }

    #[test]
    fn counts_are_summed_across_nodes() {
        let mut bigger = node("node-2");
        bigger.vcpus = 12;
        bigger.free_ram_mb = 10000;
        bigger.local_gb_used = 10;

        // node-1 fits 3, node-2 fits min(5, 5, 9) = 5.
        let result = compute_capacity(&[node("node-1"), bigger], &small_flavor()).unwrap();

        assert_eq!(8, result.free);
    }

    #[test]
    fn zero_memory_requirement_is_rejected() {
        let mut flavor = small_flavor();
        flavor.memory_mb = 0;

        let error = compute_capacity(&[node("node-1")], &flavor).unwrap_err();

        assert_eq!(InvalidFlavorError::Memory("m1.small".to_owned()), error);
    }

    #[test]
    fn zero_vcpus_requirement_is_rejected() {
        let mut flavor = small_flavor();
        flavor.vcpus = 0;

        let error = compute_capacity(&[node("node-1")], &flavor).unwrap_err();

        assert_eq!(InvalidFlavorError::Vcpus("m1.small".to_owned()), error);
    }

    #[test]
    fn zero_total_disk_requirement_is_rejected() {
        let mut flavor = small_flavor();
        flavor.root_gb = 0;
        flavor.ephemeral_gb = 0;

        let error = compute_capacity(&[node("node-1")], &flavor).unwrap_err();

        assert_eq!(InvalidFlavorError::Disk("m1.small".to_owned()), error);
    }

    #[test]
    fn negative_requirement_is_rejected() {
        let mut flavor = small_flavor();
        flavor.root_gb = -10;

        let error = compute_capacity(&[node("node-1")], &flavor).unwrap_err();

        assert_eq!(InvalidFlavorError::Disk("m1.small".to_owned()), error);
    }

    #[test]
    fn zero_ephemeral_disk_is_valid() {
        let mut flavor = small_flavor();
        flavor.ephemeral_gb = 0;
        flavor.root_gb = 30;

        // disk free 60/30=2 becomes the binding constraint
        let result = compute_capacity(&[node("node-1")], &flavor).unwrap();

        assert_eq!(2, result.free);
    }

    #[test]
    fn ephemeral_disk_adds_to_the_disk_demand() {
        let mut flavor = small_flavor();
        flavor.root_gb = 10;
        flavor.ephemeral_gb = 20;

        // disk free 60/30=2 < cpu 3
        let result = compute_capacity(&[node("node-1")], &flavor).unwrap();

        assert_eq!(2, result.free);
    }

    #[test]
    fn free_never_exceeds_max_when_free_resources_are_consistent() {
        let result = compute_capacity(&[node("node-1"), node("node-2")], &small_flavor()).unwrap();

        assert!(result.free <= result.max);
    }

    #[test]
    fn more_free_ram_never_decreases_the_free_count() {
        let base = node("node-1");
        let mut roomier = node("node-1");
        roomier.free_ram_mb += 4000;

        let before = compute_capacity(&[base], &small_flavor()).unwrap();
        let after = compute_capacity(&[roomier], &small_flavor()).unwrap();

        assert!(after.free >= before.free);
    }

    #[test]
    fn a_bigger_flavor_never_fits_more_often() {
        let mut bigger = small_flavor();
        bigger.vcpus = 4;

        let small = compute_capacity(&[node("node-1")], &small_flavor()).unwrap();
        let big = compute_capacity(&[node("node-1")], &bigger).unwrap();

        assert!(big.free <= small.free);
        assert!(big.max <= small.max);
    }
}
