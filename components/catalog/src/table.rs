use std::fmt::{self, Display, Formatter};

/// Range-partitioned tables whose layout is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionedTable {
    HoldingMarketOffer,
    HoldingMarketOfferInteraction,
    VehicleSaleStatisticView,
}

impl PartitionedTable {
    pub fn table_name(&self) -> &'static str {
        match self {
            PartitionedTable::HoldingMarketOffer => "holding_market_offer",
            PartitionedTable::HoldingMarketOfferInteraction => "holding_market_offer_interaction",
            PartitionedTable::VehicleSaleStatisticView => "vehicle_sale_statistic_view",
        }
    }
}

impl Display for PartitionedTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
