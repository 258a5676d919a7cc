//! # Block Catalog
//!
//! A static table of vanilla block ids and whether their block data carries
//! an `age` property (crops, stems, vines and friends).
//!
//! Hosts normally know this themselves and report it through
//! [`AboveBlock`](crate::rules::AboveBlock). The catalog exists for tab
//! completion and for offline simulation where no world is available.

use crate::block::BlockKey;

/// One known block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Path in the `minecraft` namespace.
    pub path: &'static str,
    /// Whether the block data has an age property.
    pub ageable: bool,
}

const fn block(path: &'static str) -> CatalogEntry {
    CatalogEntry {
        path,
        ageable: false,
    }
}

const fn crop(path: &'static str) -> CatalogEntry {
    CatalogEntry {
        path,
        ageable: true,
    }
}

/// Known vanilla blocks, sorted by path.
pub const BLOCKS: &[CatalogEntry] = &[
    block("acacia_button"),
    block("acacia_door"),
    block("acacia_fence"),
    block("acacia_fence_gate"),
    block("acacia_hanging_sign"),
    block("acacia_leaves"),
    block("acacia_log"),
    block("acacia_planks"),
    block("acacia_pressure_plate"),
    block("acacia_sapling"),
    block("acacia_sign"),
    block("acacia_slab"),
    block("acacia_stairs"),
    block("acacia_trapdoor"),
    block("acacia_wall_hanging_sign"),
    block("acacia_wall_sign"),
    block("acacia_wood"),
    block("activator_rail"),
    block("air"),
    block("allium"),
    block("amethyst_block"),
    block("amethyst_cluster"),
    block("ancient_debris"),
    block("andesite"),
    block("andesite_slab"),
    block("andesite_stairs"),
    block("andesite_wall"),
    block("anvil"),
    block("attached_melon_stem"),
    block("attached_pumpkin_stem"),
    block("azalea"),
    block("azalea_leaves"),
    block("azure_bluet"),
    crop("bamboo"),
    block("bamboo_block"),
    block("bamboo_button"),
    block("bamboo_door"),
    block("bamboo_fence"),
    block("bamboo_fence_gate"),
    block("bamboo_hanging_sign"),
    block("bamboo_mosaic"),
    block("bamboo_mosaic_slab"),
    block("bamboo_mosaic_stairs"),
    block("bamboo_planks"),
    block("bamboo_pressure_plate"),
    block("bamboo_sapling"),
    block("bamboo_sign"),
    block("bamboo_slab"),
    block("bamboo_stairs"),
    block("bamboo_trapdoor"),
    block("bamboo_wall_hanging_sign"),
    block("bamboo_wall_sign"),
    block("barrel"),
    block("barrier"),
    block("basalt"),
    block("beacon"),
    block("bedrock"),
    block("bee_nest"),
    block("beehive"),
    crop("beetroots"),
    block("bell"),
    block("big_dripleaf"),
    block("big_dripleaf_stem"),
    block("birch_button"),
    block("birch_door"),
    block("birch_fence"),
    block("birch_fence_gate"),
    block("birch_hanging_sign"),
    block("birch_leaves"),
    block("birch_log"),
    block("birch_planks"),
    block("birch_pressure_plate"),
    block("birch_sapling"),
    block("birch_sign"),
    block("birch_slab"),
    block("birch_stairs"),
    block("birch_trapdoor"),
    block("birch_wall_hanging_sign"),
    block("birch_wall_sign"),
    block("birch_wood"),
    block("black_banner"),
    block("black_bed"),
    block("black_candle"),
    block("black_candle_cake"),
    block("black_carpet"),
    block("black_concrete"),
    block("black_concrete_powder"),
    block("black_glazed_terracotta"),
    block("black_shulker_box"),
    block("black_stained_glass"),
    block("black_stained_glass_pane"),
    block("black_terracotta"),
    block("black_wall_banner"),
    block("black_wool"),
    block("blackstone"),
    block("blackstone_slab"),
    block("blackstone_stairs"),
    block("blackstone_wall"),
    block("blast_furnace"),
    block("blue_banner"),
    block("blue_bed"),
    block("blue_candle"),
    block("blue_candle_cake"),
    block("blue_carpet"),
    block("blue_concrete"),
    block("blue_concrete_powder"),
    block("blue_glazed_terracotta"),
    block("blue_ice"),
    block("blue_orchid"),
    block("blue_shulker_box"),
    block("blue_stained_glass"),
    block("blue_stained_glass_pane"),
    block("blue_terracotta"),
    block("blue_wall_banner"),
    block("blue_wool"),
    block("bone_block"),
    block("bookshelf"),
    block("brain_coral"),
    block("brain_coral_block"),
    block("brain_coral_fan"),
    block("brain_coral_wall_fan"),
    block("brewing_stand"),
    block("brick_slab"),
    block("brick_stairs"),
    block("brick_wall"),
    block("bricks"),
    block("brown_banner"),
    block("brown_bed"),
    block("brown_candle"),
    block("brown_candle_cake"),
    block("brown_carpet"),
    block("brown_concrete"),
    block("brown_concrete_powder"),
    block("brown_glazed_terracotta"),
    block("brown_mushroom"),
    block("brown_mushroom_block"),
    block("brown_shulker_box"),
    block("brown_stained_glass"),
    block("brown_stained_glass_pane"),
    block("brown_terracotta"),
    block("brown_wall_banner"),
    block("brown_wool"),
    block("bubble_column"),
    block("bubble_coral"),
    block("bubble_coral_block"),
    block("bubble_coral_fan"),
    block("bubble_coral_wall_fan"),
    block("budding_amethyst"),
    crop("cactus"),
    block("cake"),
    block("calcite"),
    block("calibrated_sculk_sensor"),
    block("campfire"),
    block("candle"),
    block("candle_cake"),
    crop("carrots"),
    block("cartography_table"),
    block("carved_pumpkin"),
    block("cauldron"),
    block("cave_air"),
    crop("cave_vines"),
    block("cave_vines_plant"),
    block("chain"),
    block("chain_command_block"),
    block("cherry_button"),
    block("cherry_door"),
    block("cherry_fence"),
    block("cherry_fence_gate"),
    block("cherry_hanging_sign"),
    block("cherry_leaves"),
    block("cherry_log"),
    block("cherry_planks"),
    block("cherry_pressure_plate"),
    block("cherry_sapling"),
    block("cherry_sign"),
    block("cherry_slab"),
    block("cherry_stairs"),
    block("cherry_trapdoor"),
    block("cherry_wall_hanging_sign"),
    block("cherry_wall_sign"),
    block("cherry_wood"),
    block("chest"),
    block("chipped_anvil"),
    block("chiseled_bookshelf"),
    block("chiseled_copper"),
    block("chiseled_deepslate"),
    block("chiseled_nether_bricks"),
    block("chiseled_polished_blackstone"),
    block("chiseled_quartz_block"),
    block("chiseled_red_sandstone"),
    block("chiseled_resin_bricks"),
    block("chiseled_sandstone"),
    block("chiseled_stone_bricks"),
    block("chiseled_tuff"),
    block("chiseled_tuff_bricks"),
    crop("chorus_flower"),
    block("chorus_plant"),
    block("clay"),
    block("closed_eyeblossom"),
    block("coal_block"),
    block("coal_ore"),
    block("coarse_dirt"),
    block("cobbled_deepslate"),
    block("cobbled_deepslate_slab"),
    block("cobbled_deepslate_stairs"),
    block("cobbled_deepslate_wall"),
    block("cobblestone"),
    block("cobblestone_slab"),
    block("cobblestone_stairs"),
    block("cobblestone_wall"),
    block("cobweb"),
    crop("cocoa"),
    block("command_block"),
    block("comparator"),
    block("composter"),
    block("conduit"),
    block("copper_block"),
    block("copper_bulb"),
    block("copper_door"),
    block("copper_grate"),
    block("copper_ore"),
    block("copper_trapdoor"),
    block("cornflower"),
    block("cracked_deepslate_bricks"),
    block("cracked_deepslate_tiles"),
    block("cracked_nether_bricks"),
    block("cracked_polished_blackstone_bricks"),
    block("cracked_stone_bricks"),
    block("crafter"),
    block("crafting_table"),
    block("creaking_heart"),
    block("creeper_head"),
    block("creeper_wall_head"),
    block("crimson_button"),
    block("crimson_door"),
    block("crimson_fence"),
    block("crimson_fence_gate"),
    block("crimson_fungus"),
    block("crimson_hanging_sign"),
    block("crimson_hyphae"),
    block("crimson_nylium"),
    block("crimson_planks"),
    block("crimson_pressure_plate"),
    block("crimson_roots"),
    block("crimson_sign"),
    block("crimson_slab"),
    block("crimson_stairs"),
    block("crimson_stem"),
    block("crimson_trapdoor"),
    block("crimson_wall_hanging_sign"),
    block("crimson_wall_sign"),
    block("crying_obsidian"),
    block("cut_copper"),
    block("cut_copper_slab"),
    block("cut_copper_stairs"),
    block("cut_red_sandstone"),
    block("cut_red_sandstone_slab"),
    block("cut_sandstone"),
    block("cut_sandstone_slab"),
    block("cyan_banner"),
    block("cyan_bed"),
    block("cyan_candle"),
    block("cyan_candle_cake"),
    block("cyan_carpet"),
    block("cyan_concrete"),
    block("cyan_concrete_powder"),
    block("cyan_glazed_terracotta"),
    block("cyan_shulker_box"),
    block("cyan_stained_glass"),
    block("cyan_stained_glass_pane"),
    block("cyan_terracotta"),
    block("cyan_wall_banner"),
    block("cyan_wool"),
    block("damaged_anvil"),
    block("dandelion"),
    block("dark_oak_button"),
    block("dark_oak_door"),
    block("dark_oak_fence"),
    block("dark_oak_fence_gate"),
    block("dark_oak_hanging_sign"),
    block("dark_oak_leaves"),
    block("dark_oak_log"),
    block("dark_oak_planks"),
    block("dark_oak_pressure_plate"),
    block("dark_oak_sapling"),
    block("dark_oak_sign"),
    block("dark_oak_slab"),
    block("dark_oak_stairs"),
    block("dark_oak_trapdoor"),
    block("dark_oak_wall_hanging_sign"),
    block("dark_oak_wall_sign"),
    block("dark_oak_wood"),
    block("dark_prismarine"),
    block("dark_prismarine_slab"),
    block("dark_prismarine_stairs"),
    block("daylight_detector"),
    block("dead_brain_coral"),
    block("dead_brain_coral_block"),
    block("dead_brain_coral_fan"),
    block("dead_brain_coral_wall_fan"),
    block("dead_bubble_coral"),
    block("dead_bubble_coral_block"),
    block("dead_bubble_coral_fan"),
    block("dead_bubble_coral_wall_fan"),
    block("dead_bush"),
    block("dead_fire_coral"),
    block("dead_fire_coral_block"),
    block("dead_fire_coral_fan"),
    block("dead_fire_coral_wall_fan"),
    block("dead_horn_coral"),
    block("dead_horn_coral_block"),
    block("dead_horn_coral_fan"),
    block("dead_horn_coral_wall_fan"),
    block("dead_tube_coral"),
    block("dead_tube_coral_block"),
    block("dead_tube_coral_fan"),
    block("dead_tube_coral_wall_fan"),
    block("decorated_pot"),
    block("deepslate"),
    block("deepslate_brick_slab"),
    block("deepslate_brick_stairs"),
    block("deepslate_brick_wall"),
    block("deepslate_bricks"),
    block("deepslate_coal_ore"),
    block("deepslate_copper_ore"),
    block("deepslate_diamond_ore"),
    block("deepslate_emerald_ore"),
    block("deepslate_gold_ore"),
    block("deepslate_iron_ore"),
    block("deepslate_lapis_ore"),
    block("deepslate_redstone_ore"),
    block("deepslate_tile_slab"),
    block("deepslate_tile_stairs"),
    block("deepslate_tile_wall"),
    block("deepslate_tiles"),
    block("detector_rail"),
    block("diamond_block"),
    block("diamond_ore"),
    block("diorite"),
    block("diorite_slab"),
    block("diorite_stairs"),
    block("diorite_wall"),
    block("dirt"),
    block("dirt_path"),
    block("dispenser"),
    block("dragon_egg"),
    block("dragon_head"),
    block("dragon_wall_head"),
    block("dried_kelp_block"),
    block("dripstone_block"),
    block("dropper"),
    block("emerald_block"),
    block("emerald_ore"),
    block("enchanting_table"),
    block("end_gateway"),
    block("end_portal"),
    block("end_portal_frame"),
    block("end_rod"),
    block("end_stone"),
    block("end_stone_brick_slab"),
    block("end_stone_brick_stairs"),
    block("end_stone_brick_wall"),
    block("end_stone_bricks"),
    block("ender_chest"),
    block("exposed_chiseled_copper"),
    block("exposed_copper"),
    block("exposed_copper_bulb"),
    block("exposed_copper_door"),
    block("exposed_copper_grate"),
    block("exposed_copper_trapdoor"),
    block("exposed_cut_copper"),
    block("exposed_cut_copper_slab"),
    block("exposed_cut_copper_stairs"),
    block("farmland"),
    block("fern"),
    crop("fire"),
    block("fire_coral"),
    block("fire_coral_block"),
    block("fire_coral_fan"),
    block("fire_coral_wall_fan"),
    block("fletching_table"),
    block("flower_pot"),
    block("flowering_azalea"),
    block("flowering_azalea_leaves"),
    block("frogspawn"),
    crop("frosted_ice"),
    block("furnace"),
    block("gilded_blackstone"),
    block("glass"),
    block("glass_pane"),
    block("glow_lichen"),
    block("glowstone"),
    block("gold_block"),
    block("gold_ore"),
    block("granite"),
    block("granite_slab"),
    block("granite_stairs"),
    block("granite_wall"),
    block("grass_block"),
    block("gravel"),
    block("gray_banner"),
    block("gray_bed"),
    block("gray_candle"),
    block("gray_candle_cake"),
    block("gray_carpet"),
    block("gray_concrete"),
    block("gray_concrete_powder"),
    block("gray_glazed_terracotta"),
    block("gray_shulker_box"),
    block("gray_stained_glass"),
    block("gray_stained_glass_pane"),
    block("gray_terracotta"),
    block("gray_wall_banner"),
    block("gray_wool"),
    block("green_banner"),
    block("green_bed"),
    block("green_candle"),
    block("green_candle_cake"),
    block("green_carpet"),
    block("green_concrete"),
    block("green_concrete_powder"),
    block("green_glazed_terracotta"),
    block("green_shulker_box"),
    block("green_stained_glass"),
    block("green_stained_glass_pane"),
    block("green_terracotta"),
    block("green_wall_banner"),
    block("green_wool"),
    block("grindstone"),
    block("hanging_roots"),
    block("hay_block"),
    block("heavy_core"),
    block("heavy_weighted_pressure_plate"),
    block("honey_block"),
    block("honeycomb_block"),
    block("hopper"),
    block("horn_coral"),
    block("horn_coral_block"),
    block("horn_coral_fan"),
    block("horn_coral_wall_fan"),
    block("ice"),
    block("infested_chiseled_stone_bricks"),
    block("infested_cobblestone"),
    block("infested_cracked_stone_bricks"),
    block("infested_deepslate"),
    block("infested_mossy_stone_bricks"),
    block("infested_stone"),
    block("infested_stone_bricks"),
    block("iron_bars"),
    block("iron_block"),
    block("iron_door"),
    block("iron_ore"),
    block("iron_trapdoor"),
    block("jack_o_lantern"),
    block("jigsaw"),
    block("jukebox"),
    block("jungle_button"),
    block("jungle_door"),
    block("jungle_fence"),
    block("jungle_fence_gate"),
    block("jungle_hanging_sign"),
    block("jungle_leaves"),
    block("jungle_log"),
    block("jungle_planks"),
    block("jungle_pressure_plate"),
    block("jungle_sapling"),
    block("jungle_sign"),
    block("jungle_slab"),
    block("jungle_stairs"),
    block("jungle_trapdoor"),
    block("jungle_wall_hanging_sign"),
    block("jungle_wall_sign"),
    block("jungle_wood"),
    crop("kelp"),
    block("kelp_plant"),
    block("ladder"),
    block("lantern"),
    block("lapis_block"),
    block("lapis_ore"),
    block("large_amethyst_bud"),
    block("large_fern"),
    block("lava"),
    block("lava_cauldron"),
    block("lectern"),
    block("lever"),
    block("light"),
    block("light_blue_banner"),
    block("light_blue_bed"),
    block("light_blue_candle"),
    block("light_blue_candle_cake"),
    block("light_blue_carpet"),
    block("light_blue_concrete"),
    block("light_blue_concrete_powder"),
    block("light_blue_glazed_terracotta"),
    block("light_blue_shulker_box"),
    block("light_blue_stained_glass"),
    block("light_blue_stained_glass_pane"),
    block("light_blue_terracotta"),
    block("light_blue_wall_banner"),
    block("light_blue_wool"),
    block("light_gray_banner"),
    block("light_gray_bed"),
    block("light_gray_candle"),
    block("light_gray_candle_cake"),
    block("light_gray_carpet"),
    block("light_gray_concrete"),
    block("light_gray_concrete_powder"),
    block("light_gray_glazed_terracotta"),
    block("light_gray_shulker_box"),
    block("light_gray_stained_glass"),
    block("light_gray_stained_glass_pane"),
    block("light_gray_terracotta"),
    block("light_gray_wall_banner"),
    block("light_gray_wool"),
    block("light_weighted_pressure_plate"),
    block("lightning_rod"),
    block("lilac"),
    block("lily_of_the_valley"),
    block("lily_pad"),
    block("lime_banner"),
    block("lime_bed"),
    block("lime_candle"),
    block("lime_candle_cake"),
    block("lime_carpet"),
    block("lime_concrete"),
    block("lime_concrete_powder"),
    block("lime_glazed_terracotta"),
    block("lime_shulker_box"),
    block("lime_stained_glass"),
    block("lime_stained_glass_pane"),
    block("lime_terracotta"),
    block("lime_wall_banner"),
    block("lime_wool"),
    block("lodestone"),
    block("loom"),
    block("magenta_banner"),
    block("magenta_bed"),
    block("magenta_candle"),
    block("magenta_candle_cake"),
    block("magenta_carpet"),
    block("magenta_concrete"),
    block("magenta_concrete_powder"),
    block("magenta_glazed_terracotta"),
    block("magenta_shulker_box"),
    block("magenta_stained_glass"),
    block("magenta_stained_glass_pane"),
    block("magenta_terracotta"),
    block("magenta_wall_banner"),
    block("magenta_wool"),
    block("magma_block"),
    block("mangrove_button"),
    block("mangrove_door"),
    block("mangrove_fence"),
    block("mangrove_fence_gate"),
    block("mangrove_hanging_sign"),
    block("mangrove_leaves"),
    block("mangrove_log"),
    block("mangrove_planks"),
    block("mangrove_pressure_plate"),
    crop("mangrove_propagule"),
    block("mangrove_roots"),
    block("mangrove_sign"),
    block("mangrove_slab"),
    block("mangrove_stairs"),
    block("mangrove_trapdoor"),
    block("mangrove_wall_hanging_sign"),
    block("mangrove_wall_sign"),
    block("mangrove_wood"),
    block("medium_amethyst_bud"),
    block("melon"),
    crop("melon_stem"),
    block("moss_block"),
    block("moss_carpet"),
    block("mossy_cobblestone"),
    block("mossy_cobblestone_slab"),
    block("mossy_cobblestone_stairs"),
    block("mossy_cobblestone_wall"),
    block("mossy_stone_brick_slab"),
    block("mossy_stone_brick_stairs"),
    block("mossy_stone_brick_wall"),
    block("mossy_stone_bricks"),
    block("moving_piston"),
    block("mud"),
    block("mud_brick_slab"),
    block("mud_brick_stairs"),
    block("mud_brick_wall"),
    block("mud_bricks"),
    block("muddy_mangrove_roots"),
    block("mushroom_stem"),
    block("mycelium"),
    block("nether_brick_slab"),
    block("nether_brick_stairs"),
    block("nether_brick_wall"),
    block("nether_bricks"),
    block("nether_gold_ore"),
    block("nether_portal"),
    block("nether_quartz_ore"),
    block("nether_sprouts"),
    crop("nether_wart"),
    block("nether_wart_block"),
    block("netherite_block"),
    block("netherrack"),
    block("note_block"),
    block("oak_button"),
    block("oak_door"),
    block("oak_fence"),
    block("oak_fence_gate"),
    block("oak_hanging_sign"),
    block("oak_leaves"),
    block("oak_log"),
    block("oak_planks"),
    block("oak_pressure_plate"),
    block("oak_sapling"),
    block("oak_sign"),
    block("oak_slab"),
    block("oak_stairs"),
    block("oak_trapdoor"),
    block("oak_wall_hanging_sign"),
    block("oak_wall_sign"),
    block("oak_wood"),
    block("observer"),
    block("obsidian"),
    block("ochre_froglight"),
    block("open_eyeblossom"),
    block("orange_banner"),
    block("orange_bed"),
    block("orange_candle"),
    block("orange_candle_cake"),
    block("orange_carpet"),
    block("orange_concrete"),
    block("orange_concrete_powder"),
    block("orange_glazed_terracotta"),
    block("orange_shulker_box"),
    block("orange_stained_glass"),
    block("orange_stained_glass_pane"),
    block("orange_terracotta"),
    block("orange_tulip"),
    block("orange_wall_banner"),
    block("orange_wool"),
    block("oxeye_daisy"),
    block("oxidized_chiseled_copper"),
    block("oxidized_copper"),
    block("oxidized_copper_bulb"),
    block("oxidized_copper_door"),
    block("oxidized_copper_grate"),
    block("oxidized_copper_trapdoor"),
    block("oxidized_cut_copper"),
    block("oxidized_cut_copper_slab"),
    block("oxidized_cut_copper_stairs"),
    block("packed_ice"),
    block("packed_mud"),
    block("pale_hanging_moss"),
    block("pale_moss_block"),
    block("pale_moss_carpet"),
    block("pale_oak_button"),
    block("pale_oak_door"),
    block("pale_oak_fence"),
    block("pale_oak_fence_gate"),
    block("pale_oak_hanging_sign"),
    block("pale_oak_leaves"),
    block("pale_oak_log"),
    block("pale_oak_planks"),
    block("pale_oak_pressure_plate"),
    block("pale_oak_sapling"),
    block("pale_oak_sign"),
    block("pale_oak_slab"),
    block("pale_oak_stairs"),
    block("pale_oak_trapdoor"),
    block("pale_oak_wall_hanging_sign"),
    block("pale_oak_wall_sign"),
    block("pale_oak_wood"),
    block("pearlescent_froglight"),
    block("peony"),
    block("petrified_oak_slab"),
    block("piglin_head"),
    block("piglin_wall_head"),
    block("pink_banner"),
    block("pink_bed"),
    block("pink_candle"),
    block("pink_candle_cake"),
    block("pink_carpet"),
    block("pink_concrete"),
    block("pink_concrete_powder"),
    block("pink_glazed_terracotta"),
    block("pink_petals"),
    block("pink_shulker_box"),
    block("pink_stained_glass"),
    block("pink_stained_glass_pane"),
    block("pink_terracotta"),
    block("pink_tulip"),
    block("pink_wall_banner"),
    block("pink_wool"),
    block("piston"),
    block("piston_head"),
    crop("pitcher_crop"),
    block("pitcher_plant"),
    block("player_head"),
    block("player_wall_head"),
    block("podzol"),
    block("pointed_dripstone"),
    block("polished_andesite"),
    block("polished_andesite_slab"),
    block("polished_andesite_stairs"),
    block("polished_basalt"),
    block("polished_blackstone"),
    block("polished_blackstone_brick_slab"),
    block("polished_blackstone_brick_stairs"),
    block("polished_blackstone_brick_wall"),
    block("polished_blackstone_bricks"),
    block("polished_blackstone_button"),
    block("polished_blackstone_pressure_plate"),
    block("polished_blackstone_slab"),
    block("polished_blackstone_stairs"),
    block("polished_blackstone_wall"),
    block("polished_deepslate"),
    block("polished_deepslate_slab"),
    block("polished_deepslate_stairs"),
    block("polished_deepslate_wall"),
    block("polished_diorite"),
    block("polished_diorite_slab"),
    block("polished_diorite_stairs"),
    block("polished_granite"),
    block("polished_granite_slab"),
    block("polished_granite_stairs"),
    block("polished_tuff"),
    block("polished_tuff_slab"),
    block("polished_tuff_stairs"),
    block("polished_tuff_wall"),
    block("poppy"),
    crop("potatoes"),
    block("potted_acacia_sapling"),
    block("potted_allium"),
    block("potted_azalea_bush"),
    block("potted_azure_bluet"),
    block("potted_bamboo"),
    block("potted_birch_sapling"),
    block("potted_blue_orchid"),
    block("potted_brown_mushroom"),
    block("potted_cactus"),
    block("potted_cherry_sapling"),
    block("potted_closed_eyeblossom"),
    block("potted_cornflower"),
    block("potted_crimson_fungus"),
    block("potted_crimson_roots"),
    block("potted_dandelion"),
    block("potted_dark_oak_sapling"),
    block("potted_dead_bush"),
    block("potted_fern"),
    block("potted_flowering_azalea_bush"),
    block("potted_jungle_sapling"),
    block("potted_lily_of_the_valley"),
    block("potted_mangrove_propagule"),
    block("potted_oak_sapling"),
    block("potted_open_eyeblossom"),
    block("potted_orange_tulip"),
    block("potted_oxeye_daisy"),
    block("potted_pale_oak_sapling"),
    block("potted_pink_tulip"),
    block("potted_poppy"),
    block("potted_red_mushroom"),
    block("potted_red_tulip"),
    block("potted_spruce_sapling"),
    block("potted_torchflower"),
    block("potted_warped_fungus"),
    block("potted_warped_roots"),
    block("potted_white_tulip"),
    block("potted_wither_rose"),
    block("powder_snow"),
    block("powder_snow_cauldron"),
    block("powered_rail"),
    block("prismarine"),
    block("prismarine_brick_slab"),
    block("prismarine_brick_stairs"),
    block("prismarine_bricks"),
    block("prismarine_slab"),
    block("prismarine_stairs"),
    block("prismarine_wall"),
    block("pumpkin"),
    crop("pumpkin_stem"),
    block("purple_banner"),
    block("purple_bed"),
    block("purple_candle"),
    block("purple_candle_cake"),
    block("purple_carpet"),
    block("purple_concrete"),
    block("purple_concrete_powder"),
    block("purple_glazed_terracotta"),
    block("purple_shulker_box"),
    block("purple_stained_glass"),
    block("purple_stained_glass_pane"),
    block("purple_terracotta"),
    block("purple_wall_banner"),
    block("purple_wool"),
    block("purpur_block"),
    block("purpur_pillar"),
    block("purpur_slab"),
    block("purpur_stairs"),
    block("quartz_block"),
    block("quartz_bricks"),
    block("quartz_pillar"),
    block("quartz_slab"),
    block("quartz_stairs"),
    block("rail"),
    block("raw_copper_block"),
    block("raw_gold_block"),
    block("raw_iron_block"),
    block("red_banner"),
    block("red_bed"),
    block("red_candle"),
    block("red_candle_cake"),
    block("red_carpet"),
    block("red_concrete"),
    block("red_concrete_powder"),
    block("red_glazed_terracotta"),
    block("red_mushroom"),
    block("red_mushroom_block"),
    block("red_nether_brick_slab"),
    block("red_nether_brick_stairs"),
    block("red_nether_brick_wall"),
    block("red_nether_bricks"),
    block("red_sand"),
    block("red_sandstone"),
    block("red_sandstone_slab"),
    block("red_sandstone_stairs"),
    block("red_sandstone_wall"),
    block("red_shulker_box"),
    block("red_stained_glass"),
    block("red_stained_glass_pane"),
    block("red_terracotta"),
    block("red_tulip"),
    block("red_wall_banner"),
    block("red_wool"),
    block("redstone_block"),
    block("redstone_lamp"),
    block("redstone_ore"),
    block("redstone_torch"),
    block("redstone_wall_torch"),
    block("redstone_wire"),
    block("reinforced_deepslate"),
    block("repeater"),
    block("repeating_command_block"),
    block("resin_block"),
    block("resin_brick_slab"),
    block("resin_brick_stairs"),
    block("resin_brick_wall"),
    block("resin_bricks"),
    block("resin_clump"),
    block("respawn_anchor"),
    block("rooted_dirt"),
    block("rose_bush"),
    block("sand"),
    block("sandstone"),
    block("sandstone_slab"),
    block("sandstone_stairs"),
    block("sandstone_wall"),
    block("scaffolding"),
    block("sculk"),
    block("sculk_catalyst"),
    block("sculk_sensor"),
    block("sculk_shrieker"),
    block("sculk_vein"),
    block("sea_lantern"),
    block("sea_pickle"),
    block("seagrass"),
    block("short_grass"),
    block("shroomlight"),
    block("shulker_box"),
    block("skeleton_skull"),
    block("skeleton_wall_skull"),
    block("slime_block"),
    block("small_amethyst_bud"),
    block("small_dripleaf"),
    block("smithing_table"),
    block("smoker"),
    block("smooth_basalt"),
    block("smooth_quartz"),
    block("smooth_quartz_slab"),
    block("smooth_quartz_stairs"),
    block("smooth_red_sandstone"),
    block("smooth_red_sandstone_slab"),
    block("smooth_red_sandstone_stairs"),
    block("smooth_sandstone"),
    block("smooth_sandstone_slab"),
    block("smooth_sandstone_stairs"),
    block("smooth_stone"),
    block("smooth_stone_slab"),
    block("sniffer_egg"),
    block("snow"),
    block("snow_block"),
    block("soul_campfire"),
    block("soul_fire"),
    block("soul_lantern"),
    block("soul_sand"),
    block("soul_soil"),
    block("soul_torch"),
    block("soul_wall_torch"),
    block("spawner"),
    block("sponge"),
    block("spore_blossom"),
    block("spruce_button"),
    block("spruce_door"),
    block("spruce_fence"),
    block("spruce_fence_gate"),
    block("spruce_hanging_sign"),
    block("spruce_leaves"),
    block("spruce_log"),
    block("spruce_planks"),
    block("spruce_pressure_plate"),
    block("spruce_sapling"),
    block("spruce_sign"),
    block("spruce_slab"),
    block("spruce_stairs"),
    block("spruce_trapdoor"),
    block("spruce_wall_hanging_sign"),
    block("spruce_wall_sign"),
    block("spruce_wood"),
    block("sticky_piston"),
    block("stone"),
    block("stone_brick_slab"),
    block("stone_brick_stairs"),
    block("stone_brick_wall"),
    block("stone_bricks"),
    block("stone_button"),
    block("stone_pressure_plate"),
    block("stone_slab"),
    block("stone_stairs"),
    block("stonecutter"),
    block("stripped_acacia_log"),
    block("stripped_acacia_wood"),
    block("stripped_bamboo_block"),
    block("stripped_birch_log"),
    block("stripped_birch_wood"),
    block("stripped_cherry_log"),
    block("stripped_cherry_wood"),
    block("stripped_crimson_hyphae"),
    block("stripped_crimson_stem"),
    block("stripped_dark_oak_log"),
    block("stripped_dark_oak_wood"),
    block("stripped_jungle_log"),
    block("stripped_jungle_wood"),
    block("stripped_mangrove_log"),
    block("stripped_mangrove_wood"),
    block("stripped_oak_log"),
    block("stripped_oak_wood"),
    block("stripped_pale_oak_log"),
    block("stripped_pale_oak_wood"),
    block("stripped_spruce_log"),
    block("stripped_spruce_wood"),
    block("stripped_warped_hyphae"),
    block("stripped_warped_stem"),
    block("structure_block"),
    block("structure_void"),
    crop("sugar_cane"),
    block("sunflower"),
    block("suspicious_gravel"),
    block("suspicious_sand"),
    crop("sweet_berry_bush"),
    block("tall_grass"),
    block("tall_seagrass"),
    block("target"),
    block("terracotta"),
    block("test_block"),
    block("test_instance_block"),
    block("tinted_glass"),
    block("tnt"),
    block("torch"),
    block("torchflower"),
    crop("torchflower_crop"),
    block("trapped_chest"),
    block("trial_spawner"),
    block("tripwire"),
    block("tripwire_hook"),
    block("tube_coral"),
    block("tube_coral_block"),
    block("tube_coral_fan"),
    block("tube_coral_wall_fan"),
    block("tuff"),
    block("tuff_brick_slab"),
    block("tuff_brick_stairs"),
    block("tuff_brick_wall"),
    block("tuff_bricks"),
    block("tuff_slab"),
    block("tuff_stairs"),
    block("tuff_wall"),
    block("turtle_egg"),
    crop("twisting_vines"),
    block("twisting_vines_plant"),
    block("vault"),
    block("verdant_froglight"),
    block("vine"),
    block("void_air"),
    block("wall_torch"),
    block("warped_button"),
    block("warped_door"),
    block("warped_fence"),
    block("warped_fence_gate"),
    block("warped_fungus"),
    block("warped_hanging_sign"),
    block("warped_hyphae"),
    block("warped_nylium"),
    block("warped_planks"),
    block("warped_pressure_plate"),
    block("warped_roots"),
    block("warped_sign"),
    block("warped_slab"),
    block("warped_stairs"),
    block("warped_stem"),
    block("warped_trapdoor"),
    block("warped_wall_hanging_sign"),
    block("warped_wall_sign"),
    block("warped_wart_block"),
    block("water"),
    block("water_cauldron"),
    block("waxed_chiseled_copper"),
    block("waxed_copper_block"),
    block("waxed_copper_bulb"),
    block("waxed_copper_door"),
    block("waxed_copper_grate"),
    block("waxed_copper_trapdoor"),
    block("waxed_cut_copper"),
    block("waxed_cut_copper_slab"),
    block("waxed_cut_copper_stairs"),
    block("waxed_exposed_chiseled_copper"),
    block("waxed_exposed_copper"),
    block("waxed_exposed_copper_bulb"),
    block("waxed_exposed_copper_door"),
    block("waxed_exposed_copper_grate"),
    block("waxed_exposed_copper_trapdoor"),
    block("waxed_exposed_cut_copper"),
    block("waxed_exposed_cut_copper_slab"),
    block("waxed_exposed_cut_copper_stairs"),
    block("waxed_oxidized_chiseled_copper"),
    block("waxed_oxidized_copper"),
    block("waxed_oxidized_copper_bulb"),
    block("waxed_oxidized_copper_door"),
    block("waxed_oxidized_copper_grate"),
    block("waxed_oxidized_copper_trapdoor"),
    block("waxed_oxidized_cut_copper"),
    block("waxed_oxidized_cut_copper_slab"),
    block("waxed_oxidized_cut_copper_stairs"),
    block("waxed_weathered_chiseled_copper"),
    block("waxed_weathered_copper"),
    block("waxed_weathered_copper_bulb"),
    block("waxed_weathered_copper_door"),
    block("waxed_weathered_copper_grate"),
    block("waxed_weathered_copper_trapdoor"),
    block("waxed_weathered_cut_copper"),
    block("waxed_weathered_cut_copper_slab"),
    block("waxed_weathered_cut_copper_stairs"),
    block("weathered_chiseled_copper"),
    block("weathered_copper"),
    block("weathered_copper_bulb"),
    block("weathered_copper_door"),
    block("weathered_copper_grate"),
    block("weathered_copper_trapdoor"),
    block("weathered_cut_copper"),
    block("weathered_cut_copper_slab"),
    block("weathered_cut_copper_stairs"),
    crop("weeping_vines"),
    block("weeping_vines_plant"),
    block("wet_sponge"),
    crop("wheat"),
    block("white_banner"),
    block("white_bed"),
    block("white_candle"),
    block("white_candle_cake"),
    block("white_carpet"),
    block("white_concrete"),
    block("white_concrete_powder"),
    block("white_glazed_terracotta"),
    block("white_shulker_box"),
    block("white_stained_glass"),
    block("white_stained_glass_pane"),
    block("white_terracotta"),
    block("white_tulip"),
    block("white_wall_banner"),
    block("white_wool"),
    block("wither_rose"),
    block("wither_skeleton_skull"),
    block("wither_skeleton_wall_skull"),
    block("yellow_banner"),
    block("yellow_bed"),
    block("yellow_candle"),
    block("yellow_candle_cake"),
    block("yellow_carpet"),
    block("yellow_concrete"),
    block("yellow_concrete_powder"),
    block("yellow_glazed_terracotta"),
    block("yellow_shulker_box"),
    block("yellow_stained_glass"),
    block("yellow_stained_glass_pane"),
    block("yellow_terracotta"),
    block("yellow_wall_banner"),
    block("yellow_wool"),
    block("zombie_head"),
    block("zombie_wall_head"),
];

/// Look up a vanilla block.
pub fn lookup(key: &BlockKey) -> Option<&'static CatalogEntry> {
    if !key.is_vanilla() {
        return None;
    }
    BLOCKS
        .binary_search_by(|entry| entry.path.cmp(key.path()))
        .ok()
        .and_then(|idx| BLOCKS.get(idx))
}

/// Whether the block is a known ageable block.
///
/// Unknown and non-vanilla blocks are treated as not ageable.
pub fn is_ageable(key: &BlockKey) -> bool {
    lookup(key).is_some_and(|entry| entry.ageable)
}

/// Block ids whose path starts with `prefix`, rendered as `minecraft:<path>`.
///
/// The prefix is matched case-insensitively. A leading `minecraft:` on the
/// prefix is accepted too.
pub fn completions(prefix: &str) -> Vec<String> {
    let lowered = prefix.to_lowercase();
    let needle = lowered.strip_prefix("minecraft:").unwrap_or(&lowered);

    BLOCKS
        .iter()
        .filter(|entry| entry.path.starts_with(needle))
        .map(|entry| BlockKey::vanilla(entry.path).into())
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
