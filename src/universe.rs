//! Fixed scan universe: the 75 most liquid US tech/consumer names.

/// Symbol and display name, in canonical scan order. Scan order is the
/// tie-break for equal metrics downstream, so the order here is stable.
pub const UNIVERSE: [(&str, &str); 75] = [
    ("AAPL", "Apple Inc"),
    ("MSFT", "Microsoft Corporation"),
    ("NVDA", "NVIDIA Corporation"),
    ("AMD", "Advanced Micro Devices"),
    ("AMZN", "Amazon.com Inc"),
    ("TSLA", "Tesla Inc"),
    ("META", "Meta Platforms Inc"),
    ("GOOGL", "Alphabet Inc"),
    ("NFLX", "Netflix Inc"),
    ("INTC", "Intel Corporation"),
    ("CRM", "Salesforce Inc"),
    ("ORCL", "Oracle Corporation"),
    ("ADBE", "Adobe Inc"),
    ("CSCO", "Cisco Systems Inc"),
    ("AVGO", "Broadcom Inc"),
    ("QCOM", "Qualcomm Inc"),
    ("TXN", "Texas Instruments Inc"),
    ("MU", "Micron Technology Inc"),
    ("AMAT", "Applied Materials Inc"),
    ("LRCX", "Lam Research Corporation"),
    ("KLAC", "KLA Corporation"),
    ("NXPI", "NXP Semiconductors NV"),
    ("MRVL", "Marvell Technology Inc"),
    ("SWKS", "Skyworks Solutions Inc"),
    ("QRVO", "Qorvo Inc"),
    ("MCHP", "Microchip Technology Inc"),
    ("ON", "ON Semiconductor Corporation"),
    ("MPWR", "Monolithic Power Systems Inc"),
    ("WOLF", "Wolfspeed Inc"),
    ("ALGM", "Allegro MicroSystems Inc"),
    ("DIOD", "Diodes Incorporated"),
    ("SLAB", "Silicon Laboratories Inc"),
    ("OLED", "Universal Display Corporation"),
    ("POWI", "Power Integrations Inc"),
    ("CRUS", "Cirrus Logic Inc"),
    ("AOSL", "Alpha and Omega Semiconductor Limited"),
    ("GOOG", "Alphabet Inc"),
    ("BABA", "Alibaba Group Holding Limited"),
    ("JD", "JD.com Inc"),
    ("PDD", "PDD Holdings Inc"),
    ("BIDU", "Baidu Inc"),
    ("NIO", "NIO Inc"),
    ("XPEV", "XPeng Inc"),
    ("LI", "Li Auto Inc"),
    ("BILI", "Bilibili Inc"),
    ("TME", "Tencent Music Entertainment Group"),
    ("WMT", "Walmart Inc"),
    ("TGT", "Target Corporation"),
    ("HD", "The Home Depot Inc"),
    ("LOW", "Lowe's Companies Inc"),
    ("COST", "Costco Wholesale Corporation"),
    ("SBUX", "Starbucks Corporation"),
    ("NKE", "Nike Inc"),
    ("MCD", "McDonald's Corporation"),
    ("DIS", "The Walt Disney Company"),
    ("CMCSA", "Comcast Corporation"),
    ("VZ", "Verizon Communications Inc"),
    ("T", "AT&T Inc"),
    ("TMUS", "T-Mobile US Inc"),
    ("CHTR", "Charter Communications Inc"),
    ("ROKU", "Roku Inc"),
    ("SPOT", "Spotify Technology SA"),
    ("SNAP", "Snap Inc"),
    ("PINS", "Pinterest Inc"),
    ("ZM", "Zoom Video Communications Inc"),
    ("UBER", "Uber Technologies Inc"),
    ("LYFT", "Lyft Inc"),
    ("DASH", "DoorDash Inc"),
    ("ABNB", "Airbnb Inc"),
    ("BKNG", "Booking Holdings Inc"),
    ("EXPE", "Expedia Group Inc"),
    ("TRIP", "Tripadvisor Inc"),
    ("RCL", "Royal Caribbean Cruises Ltd"),
    ("CCL", "Carnival Corporation"),
    ("NCLH", "Norwegian Cruise Line Holdings Ltd"),
];

pub fn symbols() -> Vec<&'static str> {
    UNIVERSE.iter().map(|(symbol, _)| *symbol).collect()
}

/// Display name for a symbol; unknown symbols fall back to the symbol.
pub fn company_name(symbol: &str) -> &str {
    UNIVERSE
        .iter()
        .find(|(candidate, _)| *candidate == symbol)
        .map(|(_, name)| *name)
        .unwrap_or(symbol)
}
