#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistryMetrics {
    pub total_routes_registered: usize,
    pub total_routes_overwritten: usize,
}

impl RegistryMetrics {
    pub fn record_insert(&mut self) {
        self.total_routes_registered += 1;
    }

    pub fn record_overwrite(&mut self) {
        self.total_routes_overwritten += 1;
    }
}
