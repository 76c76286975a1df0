mod product_test;
mod router_test;
