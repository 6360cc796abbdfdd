//! Deserialization tests for API wire types, using captured response
//! shapes from the exchange.

use vitex_sdk::api::*;
use vitex_sdk::orders::{OrderStatus, Side};

mod market_types {
    use super::*;

    #[test]
    fn test_market_pair_info_deserialize() {
        let json = r#"{
            "symbol": "EPIC-002_BTC-000",
            "tradingCurrency": "EPIC-002",
            "quoteCurrency": "BTC-000",
            "tradingCurrencyId": "tti_f370fadb275bc2a1a839c753",
            "quoteCurrencyId": "tti_b90c9baffffc9dae58d1f33f",
            "tradingCurrencyName": "Epic Cash",
            "quoteCurrencyName": "Bitcoin",
            "operator": "vite_721a68f6ebd764e3f932832a05d87f8b1e8428393a0025bc72",
            "operatorName": "VGATE",
            "pricePrecision": 8,
            "amountPrecision": 8,
            "minOrderSize": "0.0001",
            "operatorMakerFee": 0.002,
            "operatorTakerFee": 0.002,
            "highPrice": "0.00004100",
            "lowPrice": "0.00002500",
            "lastPrice": "0.00003733",
            "volume": "275000.40511192",
            "baseVolume": "8.99756407",
            "bidPrice": "0.00003600",
            "askPrice": "0.00004088",
            "openBuyOrders": 110,
            "openSellOrders": 82
        }"#;
        let market: MarketPairInfo = serde_json::from_str(json).unwrap();
        assert_eq!(market.symbol, "EPIC-002_BTC-000");
        assert_eq!(market.price_precision, 8);
        assert_eq!(market.amount_precision, 8);
        assert_eq!(market.operator_name.as_deref(), Some("VGATE"));
        assert_eq!(market.open_buy_orders, Some(110));
    }

    #[test]
    fn test_market_pair_summary_deserialize() {
        let json = r#"{
            "symbol": "AAVO-000_VITE",
            "tradeTokenSymbol": "AAVO-000",
            "quoteTokenSymbol": "VITE",
            "tradeToken": "tti_30831c79099bbe5af0b037b1",
            "quoteToken": "tti_5649544520544f4b454e6e40",
            "pricePrecision": 8,
            "quantityPrecision": 8
        }"#;
        let summary: MarketPairSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.symbol, "AAVO-000_VITE");
        assert_eq!(summary.quantity_precision, 8);
    }

    #[test]
    fn test_order_limits_deserialize() {
        let json = r#"{
            "minAmount": {"BTC-000": "0.0001", "VITE": "100"},
            "depthStepsLimit": {"DUN-000_BTC-000": {"min": 5, "max": 8}}
        }"#;
        let limits: OrderLimits = serde_json::from_str(json).unwrap();
        assert_eq!(limits.min_amount["BTC-000"], "0.0001");
        assert_eq!(limits.depth_steps_limit["DUN-000_BTC-000"].min, 5);
        assert_eq!(limits.depth_steps_limit["DUN-000_BTC-000"].max, 8);
    }

    #[test]
    fn test_depth_deserialize() {
        let json = r#"{
            "timestamp": 1635355653689,
            "asks": [["0.00004088", "55.53242804"]],
            "bids": [["0.00003600", "572.58383134"]]
        }"#;
        let depth: Depth = serde_json::from_str(json).unwrap();
        assert_eq!(depth.asks[0].price(), "0.00004088");
        assert_eq!(depth.bids[0].quantity(), "572.58383134");
    }
}

mod token_types {
    use super::*;

    #[test]
    fn test_token_info_full_deserialize() {
        let json = r#"{
            "tokenId": "tti_f370fadb275bc2a1a839c753",
            "name": "Epic Cash",
            "symbol": "EPIC-002",
            "originalSymbol": "EPIC",
            "totalSupply": "890000000000000",
            "tokenDecimals": 8,
            "tokenAccuracy": "0.00000001",
            "urlIcon": "https://example.com/epic.png"
        }"#;
        let token: TokenInfo = serde_json::from_str(json).unwrap();
        assert_eq!(token.symbol, "EPIC-002");
        assert_eq!(token.token_decimals, Some(8));
        assert_eq!(token.original_symbol.as_deref(), Some("EPIC"));
    }

    #[test]
    fn test_token_info_minimal_deserialize() {
        // The mapped/unmapped endpoints return only id and symbol.
        let json = r#"{"tokenId": "tti_687d8a93915393b219212c73", "symbol": "ETH-000"}"#;
        let token: TokenInfo = serde_json::from_str(json).unwrap();
        assert_eq!(token.symbol, "ETH-000");
        assert!(token.name.is_none());
    }

    #[test]
    fn test_tokens_query_serializes_camel_case() {
        let query = TokensQuery::default()
            .with_category("quote")
            .with_symbol_like("EPIC")
            .with_page(0, 100);
        let encoded = serde_urlencoded::to_string(&query).unwrap();
        assert_eq!(
            encoded,
            "category=quote&tokenSymbolLike=EPIC&offset=0&limit=100"
        );
    }
}

mod order_types {
    use super::*;

    #[test]
    fn test_order_info_deserialize() {
        let json = r#"{
            "address": "vite_15d3230e3c31c009c968beea7160ae98b491475236ae2cddbc",
            "orderId": "bba7552f0ef4aefef95e741a63ed11f66e62a33009e7adda5db0ab285ac59801",
            "symbol": "EPIC-002_BTC-000",
            "tradeTokenSymbol": "EPIC-002",
            "quoteTokenSymbol": "BTC-000",
            "tradeToken": "tti_f370fadb275bc2a1a839c753",
            "quoteToken": "tti_b90c9baffffc9dae58d1f33f",
            "side": 1,
            "price": "0.00003999",
            "quantity": "9.00000000",
            "amount": "0.00035991",
            "executedQuantity": "9.00000000",
            "executedAmount": "0.00035991",
            "executedPercent": "1.00000000",
            "executedAvgPrice": "0.00003999",
            "fee": "0.00000130",
            "status": 4,
            "type": 0,
            "createTime": 1635343678
        }"#;
        let order: OrderInfo = serde_json::from_str(json).unwrap();
        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.order_status().unwrap(), OrderStatus::Filled);
        assert_eq!(order.order_type, Some(0));
    }

    #[test]
    fn test_order_info_rejects_nothing_but_translation_does() {
        // Deserialization keeps the raw code; translation is the hard gate.
        let json = r#"{
            "orderId": "x",
            "symbol": "EPIC-002_BTC-000",
            "side": 0,
            "price": "1",
            "quantity": "1",
            "status": 11
        }"#;
        let order: OrderInfo = serde_json::from_str(json).unwrap();
        assert!(order.order_status().is_err());
    }

    #[test]
    fn test_orders_page_deserialize() {
        let json = r#"{
            "order": [{
                "orderId": "x",
                "symbol": "EPIC-002_BTC-000",
                "side": 1,
                "price": "0.00003999",
                "quantity": "9.00000000",
                "status": 4
            }]
        }"#;
        let page: OrdersPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.order.len(), 1);
        assert!(page.total.is_none());
    }

    #[test]
    fn test_cancelled_order_deserialize() {
        let json = r#"{
            "symbol": "VX_ETH-000",
            "orderId": "de185edae25a60dff421c1be23ac298b121cb8bebeff2ecb25807ce7d72cf622",
            "cancelRequest": "355b6fab007d86e7ff09b0793fbb205e82d3880b64d948ed46f88237115349ab",
            "status": 6
        }"#;
        let row: CancelledOrder = serde_json::from_str(json).unwrap();
        assert_eq!(row.symbol, "VX_ETH-000");
        assert_eq!(OrderStatus::from_code(row.status).unwrap(), OrderStatus::PendingCancel);
    }

    #[test]
    fn test_orders_query_serializes_camel_case() {
        let query = OrdersQuery::default()
            .with_symbol("EPIC-002_BTC-000")
            .with_side(Side::Sell)
            .with_time_range(1, 2);
        let encoded = serde_urlencoded::to_string(&query).unwrap();
        assert_eq!(
            encoded,
            "symbol=EPIC-002_BTC-000&startTime=1&endTime=2&side=1"
        );
    }
}

mod trade_types {
    use super::*;

    #[test]
    fn test_trade_tick_deserialize() {
        let json = r#"{
            "timestamp": 1635355988000,
            "price": "0.00003733",
            "amount": "500.00000000",
            "side": 0
        }"#;
        let tick: TradeTick = serde_json::from_str(json).unwrap();
        assert_eq!(tick.side, Side::Buy);
        assert_eq!(tick.price, "0.00003733");
    }

    #[test]
    fn test_trades_page_deserialize() {
        let json = r#"{
            "height": null,
            "trade": [{
                "tradeId": "29b58e69079295499f5c815db002f29111cfb55d",
                "symbol": "EPIC-002_BTC-000",
                "tradeTokenSymbol": "EPIC-002",
                "quoteTokenSymbol": "BTC-000",
                "price": "0.00003733",
                "quantity": "128.54395437",
                "amount": "0.00479854",
                "time": 1635355704,
                "side": 1,
                "buyFee": "0.00001728",
                "sellFee": "0.00001919",
                "blockHeight": 48313111
            }]
        }"#;
        let page: TradesPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.trade.len(), 1);
        assert_eq!(page.trade[0].side, Side::Sell);
        assert_eq!(page.trade[0].block_height, Some(48313111));
    }
}

mod ticker_types {
    use super::*;

    #[test]
    fn test_ticker_stats_deserialize() {
        let json = r#"{
            "symbol": "PGOLD-001_BTC-000",
            "tradeTokenSymbol": "PGOLD-001",
            "quoteTokenSymbol": "BTC-000",
            "tradeToken": "tti_3cc6dddfb53f3cc5fbb4e7a4",
            "quoteToken": "tti_b90c9baffffc9dae58d1f33f",
            "openPrice": "0.00000000",
            "prevClosePrice": "0.00000000",
            "closePrice": "0.00000000",
            "priceChange": "0.00000000",
            "priceChangePercent": 0.0,
            "highPrice": "0.00000000",
            "lowPrice": "0.00000000",
            "quantity": "0.00000000",
            "amount": "0.00000000",
            "pricePrecision": 8,
            "quantityPrecision": 2,
            "openTime": null,
            "closeTime": null
        }"#;
        let stats: TickerStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.quantity_precision, 2);
        assert!(stats.open_time.is_none());
    }

    #[test]
    fn test_book_ticker_deserialize() {
        let json = r#"{
            "symbol": "EPIC-002_BTC-000",
            "bidPrice": "0.00003600",
            "bidQuantity": "572.58383134",
            "askPrice": "0.00003733",
            "askQuantity": "56.37728146",
            "height": null
        }"#;
        let ticker: BookTicker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.bid_price, "0.00003600");
        assert!(ticker.height.is_none());
    }
}

mod account_types {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    #[test]
    fn test_balance_map_deserialize() {
        let json = r#"{
            "EPIC-002": {"available": "3682.95575597", "locked": "0.00000000"}
        }"#;
        let balances: HashMap<String, TokenBalance> = serde_json::from_str(json).unwrap();
        let epic = &balances["EPIC-002"];
        assert_eq!(epic.available, dec!(3682.95575597));
        assert_eq!(epic.total(), dec!(3682.95575597));
    }

    #[test]
    fn test_deposit_withdraw_record_deserialize() {
        let json = r#"{
            "time": 1635252570,
            "tokenSymbol": "EPIC",
            "amount": "10.00000000",
            "type": 2
        }"#;
        let record: DepositWithdrawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.record_type, 2);
        assert_eq!(record.token_symbol, "EPIC");
    }

    #[test]
    fn test_trade_fee_info_deserialize() {
        let json = r#"{
            "tradePoolVx": {"1": "2386.387391592278053218"},
            "tradePoolFee": {"1": "4865.323236794250000000"}
        }"#;
        let info: TradeFeeInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.trade_pool_vx["1"], "2386.387391592278053218");
    }
}

mod envelopes {
    use super::*;

    #[test]
    fn test_server_time_envelope() {
        let json = r#"{"code":0,"data":1635355988000,"msg":null}"#;
        let envelope: ApiEnvelope<i64> = serde_json::from_str(json).unwrap();
        let millis = envelope.classify().unwrap().into_data().unwrap();
        assert_eq!(millis, 1635355988000);
    }

    #[test]
    fn test_candles_envelope() {
        let json = r#"{"code":0,"data":{"t":[1554207060],"c":[1.0],"p":[1.0],"h":[1.0],"l":[1.0],"v":[12970.8]},"msg":null}"#;
        let envelope: ApiEnvelope<Candles> = serde_json::from_str(json).unwrap();
        let candles = envelope.classify().unwrap().into_data().unwrap();
        assert_eq!(candles.len(), 1);
        assert_eq!(candles.v[0], 12970.8);
    }
}
